/// Fixed destinations of the page controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// "Start for free" on the landing page
    Problem,
    /// "Learn more" on the landing page
    Chat,
    /// Trigger form submission
    ChatWithTrigger(String),
}

impl NavTarget {
    pub fn path(&self) -> String {
        match self {
            NavTarget::Problem => "/problem".to_string(),
            NavTarget::Chat => "/chat".to_string(),
            NavTarget::ChatWithTrigger(value) => {
                format!("/chat?trigger={}", urlencoding::encode(value))
            }
        }
    }
}

impl std::fmt::Display for NavTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_paths() {
        assert_eq!(NavTarget::Problem.path(), "/problem");
        assert_eq!(NavTarget::Chat.path(), "/chat");
    }

    #[test]
    fn test_trigger_is_query_encoded() {
        let target = NavTarget::ChatWithTrigger("stress".into());
        assert_eq!(target.to_string(), "/chat?trigger=stress");

        let target = NavTarget::ChatWithTrigger("a b&c".into());
        assert_eq!(target.path(), "/chat?trigger=a%20b%26c");
    }
}
