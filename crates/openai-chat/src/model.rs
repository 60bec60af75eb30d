pub const DEFAULT_TEXT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_VISION_MODEL: &str = "gpt-4-turbo";

/// Picks the upstream model from the shape of the request: a text-only model
/// when there is nothing to look at, a vision model otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub text: String,
    pub vision: String,
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT_MODEL.into(),
            vision: DEFAULT_VISION_MODEL.into(),
        }
    }
}

impl ModelSelection {
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text = model.into();
        self
    }

    pub fn with_vision_model(mut self, model: impl Into<String>) -> Self {
        self.vision = model.into();
        self
    }

    pub fn resolve(&self, image_count: usize) -> &str {
        if image_count == 0 {
            &self.text
        } else {
            &self.vision
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve() {
        let cases: &[(&str, ModelSelection, usize, &str)] = &[
            ("no_images", ModelSelection::default(), 0, "gpt-3.5-turbo"),
            ("one_image", ModelSelection::default(), 1, "gpt-4-turbo"),
            ("many_images", ModelSelection::default(), 5, "gpt-4-turbo"),
            (
                "custom_text",
                ModelSelection::default().with_text_model("gpt-4o-mini"),
                0,
                "gpt-4o-mini",
            ),
            (
                "custom_vision",
                ModelSelection::default().with_vision_model("gpt-4o"),
                2,
                "gpt-4o",
            ),
        ];

        for (name, selection, image_count, expected) in cases {
            assert_eq!(selection.resolve(*image_count), *expected, "{name}");
        }
    }
}
