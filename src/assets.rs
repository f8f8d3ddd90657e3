use crate::font::Font;
use id_arena::{Arena, Id};

#[derive(Default)]
/// Read-only resources shared by every frame of a render job. Loading a font
/// is a one-time operation; frames refer to fonts by arena id.
pub struct Assets {
    pub fonts: Arena<Font>,
}

impl Assets {
    /// Add a font to the assets, returning the id used to refer to it in a
    /// [`crate::MemeRecipe`]
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }
}
