/// Greeting returned when no name is given.
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Builds a greeting for `name`.
///
/// Only the zero-length string falls back to [`DEFAULT_GREETING`]; whitespace
/// is greeted verbatim.
pub fn greet(name: &str) -> String {
    if name.is_empty() {
        DEFAULT_GREETING.to_string()
    } else {
        format!("Hello, {name}!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_default() {
        assert_eq!(greet(""), "Hello, World!");
    }

    #[test]
    fn test_greet_name() {
        assert_eq!(greet("Rust"), "Hello, Rust!");
        assert_eq!(greet("C++"), "Hello, C++!");
    }

    #[test]
    fn test_greet_world_matches_default() {
        assert_eq!(greet("World"), DEFAULT_GREETING);
    }

    #[test]
    fn test_greet_whitespace_is_not_empty() {
        assert_eq!(greet(" "), "Hello,  !");
        assert_eq!(greet("\t"), "Hello, \t!");
    }

    #[test]
    fn test_greet_non_ascii() {
        assert_eq!(greet("世界"), "Hello, 世界!");
    }

    #[test]
    fn test_greet_is_repeatable() {
        let first = greet("Ferris");
        for _ in 0..10 {
            assert_eq!(greet("Ferris"), first);
        }
    }

    #[test]
    fn test_greet_from_many_threads() {
        let names = ["", "a", "C++", " ", "Ferris"];
        std::thread::scope(|scope| {
            let handles: Vec<_> = names
                .iter()
                .map(|name| scope.spawn(move || (name, greet(name))))
                .collect();

            for handle in handles {
                let (name, greeting) = handle.join().unwrap();
                assert_eq!(greeting, greet(name));
            }
        });
    }
}
