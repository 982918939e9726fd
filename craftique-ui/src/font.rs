use iced::{font::Weight, Font};

// System sans-serif, no font file is bundled.
pub const REGULAR: Font = Font::DEFAULT;

pub const MEDIUM: Font = Font {
    weight: Weight::Medium,
    ..Font::DEFAULT
};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};
