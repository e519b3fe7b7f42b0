use regex::Regex;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

pub fn validate_email(email: &str) -> bool {
    let re = EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    re.is_match(email)
}

/// Retourne la liste des champs requis absents (valeur `None` ou vide),
/// dans l'ordre de déclaration, pour composer le message
/// "Champs manquants : ...".
pub fn missing_fields(fields: &[(&'static str, Option<&str>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.map(|v| v.trim().is_empty()).unwrap_or(true))
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jean.dupont@example.com"));
        assert!(validate_email("a@b.fr"));
        assert!(!validate_email("pas-un-email"));
        assert!(!validate_email("jean@dupont"));
        assert!(!validate_email("jean dupont@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_missing_fields() {
        let missing = missing_fields(&[
            ("nom", Some("Dupont")),
            ("prenom", Some("")),
            ("email", None),
        ]);
        assert_eq!(missing, vec!["prenom", "email"]);
    }
}
