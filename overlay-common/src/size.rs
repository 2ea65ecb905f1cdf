use serde::{Deserialize, Serialize};

/// Width variant of a modal panel
///
/// Each variant maps to a fixed maximum-width constraint. Parsing never
/// fails: unknown keywords resolve to [`ModalSize::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModalSize {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

#[allow(clippy::derivable_impls)]
impl Default for ModalSize {
    fn default() -> Self {
        ModalSize::Medium
    }
}

impl ModalSize {
    pub const ALL: [ModalSize; 4] = [
        ModalSize::Small,
        ModalSize::Medium,
        ModalSize::Large,
        ModalSize::ExtraLarge,
    ];

    /// Resolve a size keyword (`sm`, `md`, `lg`, `xl` or the long forms).
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "sm" | "small" => ModalSize::Small,
            "md" | "medium" => ModalSize::Medium,
            "lg" | "large" => ModalSize::Large,
            "xl" | "extra-large" | "extralarge" | "extra_large" => ModalSize::ExtraLarge,
            other => {
                tracing::debug!("Unknown modal size '{}', using medium", other);
                ModalSize::Medium
            }
        }
    }

    /// Short keyword, the inverse of [`ModalSize::from_keyword`]
    pub fn keyword(self) -> &'static str {
        match self {
            ModalSize::Small => "sm",
            ModalSize::Medium => "md",
            ModalSize::Large => "lg",
            ModalSize::ExtraLarge => "xl",
        }
    }

    /// Tailwind class carrying the max-width constraint
    pub fn max_width_class(self) -> &'static str {
        match self {
            ModalSize::Small => "max-w-sm",
            ModalSize::Medium => "max-w-md",
            ModalSize::Large => "max-w-lg",
            ModalSize::ExtraLarge => "max-w-xl",
        }
    }

    /// Maximum panel width in rem (matches the Tailwind scale)
    pub fn max_width_rem(self) -> u32 {
        match self {
            ModalSize::Small => 24,
            ModalSize::Medium => 28,
            ModalSize::Large => 32,
            ModalSize::ExtraLarge => 36,
        }
    }
}

impl From<String> for ModalSize {
    fn from(keyword: String) -> Self {
        ModalSize::from_keyword(&keyword)
    }
}

impl From<ModalSize> for String {
    fn from(size: ModalSize) -> Self {
        size.keyword().to_string()
    }
}
