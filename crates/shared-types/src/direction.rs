use serde::{Deserialize, Serialize};

/// Reading direction of a field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn from_rtl(rtl: bool) -> Self {
        if rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn text_align(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "left",
            TextDirection::Rtl => "right",
        }
    }

    /// Flex direction of the icon + text control row. RTL puts the icon last.
    pub fn flex_direction(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "row",
            TextDirection::Rtl => "row-reverse",
        }
    }

    /// CSS property that reserves room for the icon inside the text control.
    pub fn icon_padding_property(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "padding-left",
            TextDirection::Rtl => "padding-right",
        }
    }
}
