use ratatui::style::Color;

/// Colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub border: Color,
    pub text: Color,
    pub separator: Color,
    pub popup_border: Color,
    pub tile_hidden: Color,
    pub tile_face_up: Color,
    pub tile_solved: Color,
    pub cursor: Color,
    pub status_ok: Color,
    pub status_error: Color,
    pub highlight: Color,
}

pub const DARK: Palette = Palette {
    accent: Color::Rgb(0xda, 0x77, 0x56),
    border: Color::Rgb(0x40, 0x40, 0x40),
    text: Color::Rgb(0xe5, 0xe5, 0xe5),
    separator: Color::Rgb(0x6b, 0x72, 0x80),
    popup_border: Color::Rgb(0xe5, 0xe5, 0xe5),
    tile_hidden: Color::Rgb(0x37, 0x41, 0x51),
    tile_face_up: Color::Rgb(0x1e, 0x3a, 0x8a),
    tile_solved: Color::Rgb(0x14, 0x53, 0x2d),
    cursor: Color::Rgb(0xfa, 0xcc, 0x15),
    status_ok: Color::Rgb(0x22, 0xc5, 0x5e),
    status_error: Color::Rgb(0xef, 0x44, 0x44),
    highlight: Color::Rgb(0x26, 0x26, 0x26),
};

pub const LIGHT: Palette = Palette {
    accent: Color::Rgb(0xc2, 0x41, 0x0c),
    border: Color::Rgb(0xa3, 0xa3, 0xa3),
    text: Color::Rgb(0x17, 0x17, 0x17),
    separator: Color::Rgb(0x9c, 0xa3, 0xaf),
    popup_border: Color::Rgb(0x40, 0x40, 0x40),
    tile_hidden: Color::Rgb(0xd1, 0xd5, 0xdb),
    tile_face_up: Color::Rgb(0xbf, 0xdb, 0xfe),
    tile_solved: Color::Rgb(0xbb, 0xf7, 0xd0),
    cursor: Color::Rgb(0xb4, 0x53, 0x09),
    status_ok: Color::Rgb(0x15, 0x80, 0x3d),
    status_error: Color::Rgb(0xb9, 0x1c, 0x1c),
    highlight: Color::Rgb(0xe5, 0xe7, 0xeb),
};

pub fn palette(dark_mode: bool) -> &'static Palette {
    if dark_mode {
        &DARK
    } else {
        &LIGHT
    }
}
