//! Query-string construction.

use std::borrow::Cow;
use std::fmt::{Display, Write};

use serde::{Deserialize, Serialize};

use crate::focus::FocusArea;
use crate::format::ImageFormat;
use crate::resize::ResizeBehaviour;

/// Resize and transform parameters for a single image URL.
///
/// A plain value type: set the fields you need, struct update syntax against
/// [`ImageQuery::default`] covers the rest, then call
/// [`ImageQuery::query_string`]. Every field deserializes with a default, so
/// pipelines can keep image presets in their configuration files.
///
/// # Example
///
/// ```
/// use weft_images::{ImageFormat, ImageQuery, ResizeBehaviour};
///
/// let query = ImageQuery {
///     width: Some(640),
///     height: Some(360),
///     resize_behaviour: ResizeBehaviour::Fill,
///     format: ImageFormat::Webp,
///     ..ImageQuery::default()
/// };
///
/// assert_eq!(query.query_string(), "?w=640&h=360&fit=fill&fm=webp");
/// assert_eq!(ImageQuery::default().query_string(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImageQuery {
    /// Target width in pixels (`w`).
    pub width: Option<u32>,
    /// Target height in pixels (`h`).
    pub height: Option<u32>,
    /// JPEG compression quality, nominally 1 to 100 (`q`). Passed through
    /// unvalidated.
    pub jpg_quality: Option<u8>,
    /// Corner rounding radius in pixels (`r`). `Some(0)` is emitted as
    /// `r=0`, which the service treats as no rounding.
    pub corner_radius: Option<u32>,
    /// Resize strategy (`fit`).
    pub resize_behaviour: ResizeBehaviour,
    /// Output encoding (`fm`).
    pub format: ImageFormat,
    /// Crop anchor (`f`).
    pub focus: FocusArea,
    /// Background color for padded or rounded areas (`bg`). A `#`-prefixed
    /// hex value is rewritten to the service's `rgb:` form; anything else is
    /// passed through verbatim.
    pub background_color: Option<String>,
}

impl ImageQuery {
    /// Serialize the present parameters to a URL query fragment.
    ///
    /// Parameters appear in the fixed order `w`, `h`, `q`, `r`, `fit`, `fm`,
    /// `f`, `bg`; the first is prefixed with `?`, the rest join with `&`.
    /// With nothing set the result is the empty string, so appending to a
    /// base URL is always safe. Values are emitted as-is, without percent
    /// encoding; the service's vocabulary needs none.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = String::new();

        if let Some(width) = self.width {
            push_param(&mut query, "w", &width);
        }
        if let Some(height) = self.height {
            push_param(&mut query, "h", &height);
        }
        if let Some(quality) = self.jpg_quality {
            push_param(&mut query, "q", &quality);
        }
        if let Some(radius) = self.corner_radius {
            push_param(&mut query, "r", &radius);
        }
        if let Some(fit) = self.resize_behaviour.token() {
            push_param(&mut query, "fit", &fit);
        }
        if let Some(format) = self.format.token() {
            push_param(&mut query, "fm", &format);
        }
        if let Some(focus) = self.focus.token() {
            push_param(&mut query, "f", &focus);
        }
        if let Some(background) = background_token(self.background_color.as_deref()) {
            push_param(&mut query, "bg", &background);
        }

        query
    }
}

/// Append one `key=value` pair with the right `?`/`&` separator.
fn push_param(query: &mut String, key: &str, value: &dyn Display) {
    let separator = if query.is_empty() { '?' } else { '&' };
    // Writing to a String never fails.
    write!(query, "{separator}{key}={value}").unwrap();
}

/// Wire value of the background color.
///
/// Absent and empty colors are skipped. `#`-prefixed hex becomes `rgb:`
/// followed by the digits, the service's spelling; other values pass through
/// verbatim.
fn background_token(color: Option<&str>) -> Option<Cow<'_, str>> {
    let color = color?;
    if color.is_empty() {
        return None;
    }
    match color.strip_prefix('#') {
        Some(hex) => Some(Cow::Owned(format!("rgb:{hex}"))),
        None => Some(Cow::Borrowed(color)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ImageQuery;
    use crate::{FocusArea, ImageFormat, ResizeBehaviour};

    #[test]
    fn empty_query_is_the_empty_string() {
        assert_eq!(ImageQuery::default().query_string(), "");
    }

    #[test]
    fn single_parameter_gets_the_question_mark() {
        let query = ImageQuery {
            width: Some(200),
            ..ImageQuery::default()
        };

        assert_eq!(query.query_string(), "?w=200");
    }

    #[test]
    fn parameters_appear_in_fixed_order() {
        let query = ImageQuery {
            width: Some(640),
            height: Some(360),
            jpg_quality: Some(80),
            corner_radius: Some(12),
            resize_behaviour: ResizeBehaviour::Pad,
            format: ImageFormat::Jpg,
            focus: FocusArea::TopLeft,
            background_color: Some("#00aacc".to_owned()),
        };

        assert_eq!(
            query.query_string(),
            "?w=640&h=360&q=80&r=12&fit=pad&fm=jpg&f=top_left&bg=rgb:00aacc"
        );
    }

    #[test]
    fn order_is_independent_of_which_parameters_are_set() {
        let query = ImageQuery {
            background_color: Some("white".to_owned()),
            height: Some(100),
            ..ImageQuery::default()
        };

        assert_eq!(query.query_string(), "?h=100&bg=white");
    }

    #[test]
    fn zero_radius_is_emitted() {
        let query = ImageQuery {
            corner_radius: Some(0),
            ..ImageQuery::default()
        };

        assert_eq!(query.query_string(), "?r=0");
    }

    #[test]
    fn hex_background_is_rewritten_to_rgb_form() {
        let query = ImageQuery {
            background_color: Some("#ff0000".to_owned()),
            ..ImageQuery::default()
        };

        assert_eq!(query.query_string(), "?bg=rgb:ff0000");
    }

    #[test]
    fn named_background_passes_through() {
        let query = ImageQuery {
            background_color: Some("rgb:9090ff".to_owned()),
            ..ImageQuery::default()
        };

        assert_eq!(query.query_string(), "?bg=rgb:9090ff");
    }

    #[test]
    fn empty_background_is_skipped() {
        let query = ImageQuery {
            width: Some(10),
            background_color: Some(String::new()),
            ..ImageQuery::default()
        };

        assert_eq!(query.query_string(), "?w=10");
    }

    #[test]
    fn query_string_is_pure() {
        let query = ImageQuery {
            width: Some(320),
            format: ImageFormat::Png,
            ..ImageQuery::default()
        };

        assert_eq!(query.query_string(), query.query_string());
        assert_eq!(query.width, Some(320));
    }

    #[test]
    fn deserializes_from_toml_preset() {
        let query: ImageQuery = toml::from_str(
            r#"
            width = 320
            jpg_quality = 70
            format = "webp"
            focus = "faces"
            "#,
        )
        .unwrap();

        assert_eq!(query.width, Some(320));
        assert_eq!(query.height, None);
        assert_eq!(query.format, ImageFormat::Webp);
        assert_eq!(query.query_string(), "?w=320&q=70&fm=webp&f=faces");
    }

    #[test]
    fn deserializes_from_json_with_defaults() {
        let query: ImageQuery = serde_json::from_str(r#"{ "height": 90 }"#).unwrap();

        assert_eq!(query, ImageQuery { height: Some(90), ..ImageQuery::default() });
    }
}
