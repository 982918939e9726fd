use iced::Color;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const WHITE: Color = iced::Color::WHITE;

pub const GREY_7: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x37 as f32 / 255.0,
); // #1F2937
pub const GREY_5: Color = Color::from_rgb(
    0x4B as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x63 as f32 / 255.0,
); // #4B5563
pub const GREY_3: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
); // #9CA3AF
pub const GREY_2: Color = Color::from_rgb(
    0xD1 as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xDB as f32 / 255.0,
); // #D1D5DB
pub const GREY_1: Color = Color::from_rgb(
    0xF3 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF6 as f32 / 255.0,
); // #F3F4F6

// Woodcraft accents
pub const AMBER_50: Color = Color::from_rgb(
    0xFF as f32 / 255.0,
    0xFB as f32 / 255.0,
    0xEB as f32 / 255.0,
); // #FFFBEB
pub const AMBER_100: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xF3 as f32 / 255.0,
    0xC7 as f32 / 255.0,
); // #FEF3C7
pub const AMBER_600: Color = Color::from_rgb(
    0xD9 as f32 / 255.0,
    0x77 as f32 / 255.0,
    0x06 as f32 / 255.0,
); // #D97706
pub const AMBER_700: Color = Color::from_rgb(
    0xB4 as f32 / 255.0,
    0x53 as f32 / 255.0,
    0x09 as f32 / 255.0,
); // #B45309
pub const AMBER_800: Color = Color::from_rgb(
    0x92 as f32 / 255.0,
    0x40 as f32 / 255.0,
    0x0E as f32 / 255.0,
); // #92400E
pub const TRANSPARENT_AMBER: Color = Color::from_rgba(
    0xD9 as f32 / 255.0,
    0x77 as f32 / 255.0,
    0x06 as f32 / 255.0,
    0.15,
);

pub const GREEN: Color = Color::from_rgb(
    0x16 as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0x4A as f32 / 255.0,
); // #16A34A
pub const LIGHT_GREEN: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0xFC as f32 / 255.0,
    0xE7 as f32 / 255.0,
); // #DCFCE7
pub const RED: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
); // #DC2626
pub const LIGHT_RED: Color = Color::from_rgb(
    0xFE as f32 / 255.0,
    0xE2 as f32 / 255.0,
    0xE2 as f32 / 255.0,
); // #FEE2E2
