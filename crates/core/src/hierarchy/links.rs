//! URL joining.

/// Joins link segments with single slashes, skipping empty segments.
///
/// `join_links(&["/shop/", "/product/4", "edit"])` gives
/// `"/shop/product/4/edit"`.
pub fn join_links(parts: &[&str]) -> String {
    let mut link = String::new();

    for part in parts.iter().filter(|p| !p.is_empty()) {
        if link.is_empty() {
            link.push_str(part);
            continue;
        }
        match (link.ends_with('/'), part.starts_with('/')) {
            (true, true) => link.push_str(part.trim_start_matches('/')),
            (false, false) => {
                link.push('/');
                link.push_str(part);
            }
            _ => link.push_str(part),
        }
    }

    link
}

#[cfg(test)]
mod tests {
    use super::join_links;

    #[test]
    fn test_join_links_collapses_slashes() {
        assert_eq!(join_links(&["/shop/", "/product/4", "edit"]), "/shop/product/4/edit");
        assert_eq!(join_links(&["/", "product/4"]), "/product/4");
    }

    #[test]
    fn test_join_links_skips_empty_parts() {
        assert_eq!(join_links(&["/", "", "category/2", ""]), "/category/2");
        assert_eq!(join_links(&[]), "");
    }
}
