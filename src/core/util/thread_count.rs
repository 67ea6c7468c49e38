/// Logical CPUs available to the process, at least 1.
pub fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_available_parallelism() {
        let expected = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);

        assert_eq!(default_thread_count(), expected);
        assert!(default_thread_count() >= 1);
    }
}
