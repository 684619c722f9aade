//! Application-level configuration constants.

use crate::order::ProductModel;

// Timers
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const PRESELECT_DELAY_MS: u32 = 800;
pub const PRESS_RESET_MS: u32 = 150;
pub const HINT_RESET_MS: u32 = 2_000;
pub const SMOOTH_SCROLL_MS: f64 = 600.0;
pub const SCROLL_FRAME_MS: u32 = 16;

// Field limits
pub const NAME_MIN_CHARS: usize = 2;
pub const ADDRESS_MIN_CHARS: usize = 10;
pub const PHONE_MIN_DIGITS: usize = 10;

// Layout
pub const HEADER_OFFSET_PX: f64 = 80.0;
pub const REVEAL_OFFSET_PX: f64 = 50.0;

// DOM anchors
pub const ORDER_SECTION_ID: &str = "order";
pub const FADE_IN_SELECTOR: &str = ".fade-in";
pub const PRESSABLE_SELECTOR: &str = ".btn";
pub const PAUSED_CLASS: &str = "animations-paused";

/// Product catalog offered by the model selector and the model cards.
pub const MODELS: &[ProductModel] = &[
    ProductModel {
        id: "X1",
        title: "X1 Lite",
        tagline: "Компактная модель для города",
        price_rub: 49_990,
        image: "assets/x1.webp",
    },
    ProductModel {
        id: "X2",
        title: "X2 Sport",
        tagline: "Запас хода 60 км и усиленная рама",
        price_rub: 69_990,
        image: "assets/x2.webp",
    },
    ProductModel {
        id: "X3",
        title: "X3 Pro",
        tagline: "Флагман с двумя моторами",
        price_rub: 99_990,
        image: "assets/x3.webp",
    },
];

/// `<script type="application/json">` element that may override the locale.
pub const LOCALE_ELEMENT_ID: &str = "locale";
