//! Dataset colors.

/// Fill and stroke pair for a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub background: &'static str,
    pub border: &'static str,
}

pub const DISTANCE: Swatch = Swatch {
    background: "rgba(76, 76, 76, 0.8)",
    border: "rgba(76, 76, 76, 1)",
};

pub const RUNNING_SUM: Swatch = Swatch {
    background: "rgba(252, 132, 151, 0.08)",
    border: "rgba(252, 132, 151, 1)",
};

pub const VO2_MAX: Swatch = Swatch {
    background: "rgba(252, 132, 151, 0.05)",
    border: "rgba(252, 132, 151, 0.4)",
};

pub const TITLE_COLOR: &str = "rgba(255,235,255,1)";

/// Per-category bar colors, falling back to the distance grey.
pub fn category(name: &str) -> Swatch {
    match name {
        "Run" => Swatch {
            background: "rgba(252, 132, 151, 0.8)",
            border: "rgba(252, 132, 151, 1)",
        },
        "Cycling" => Swatch {
            background: "rgba(99, 179, 237, 0.8)",
            border: "rgba(99, 179, 237, 1)",
        },
        "Swim" => Swatch {
            background: "rgba(104, 211, 145, 0.8)",
            border: "rgba(104, 211, 145, 1)",
        },
        _ => DISTANCE,
    }
}
