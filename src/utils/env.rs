/// Reads a single variable from the process environment.
///
/// Unset and non-UTF-8 values both come back as `None`.
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_variable_is_none() {
        assert_eq!(env_var("CANVAS_BACKEND_CONFIG_SURELY_UNSET_VAR"), None);
    }
}
