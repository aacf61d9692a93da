/// Comma-separated list items, trimmed, skipping blanks.
pub fn list_items(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_items_trims_and_skips_blanks() {
        let items: Vec<&str> = list_items(" max-rolls, ,final,").collect();
        assert_eq!(items, ["max-rolls", "final"]);
        assert_eq!(list_items("").count(), 0);
    }
}
