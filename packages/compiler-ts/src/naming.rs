/// Convert a schema name such as `user-profile` to `UserProfile`
pub fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| c == '-' || c == '_' || c == '.' || c == '/' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_pascal_case("user-profile"), "UserProfile");
        assert_eq!(to_pascal_case("user"), "User");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(to_pascal_case("billing_account.entry"), "BillingAccountEntry");
        assert_eq!(to_pascal_case("org/team member"), "OrgTeamMember");
        assert_eq!(to_pascal_case("--leading--and--trailing--"), "LeadingAndTrailing");
    }

    #[test]
    fn test_camel_case_keeps_inner_capitals() {
        assert_eq!(to_pascal_case("userProfile"), "UserProfile");
        assert_eq!(to_pascal_case("api-URL"), "ApiURL");
    }

    #[test]
    fn test_empty() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("-"), "");
    }
}
