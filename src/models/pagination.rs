use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginationParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    /// Recherche plein-texte optionnelle (nom/prenom/email côté back-office)
    pub search: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub per_page: u32,
    pub total: i64,
    pub total_pages: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

impl PaginationParams {
    pub fn get_page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn get_per_page(&self) -> u32 {
        self.per_page.unwrap_or(20).clamp(1, 100)
    }

    /// Calcul en u64: une page arbitrairement grande fournie par le client
    /// ne doit pas faire déborder la multiplication.
    pub fn get_offset(&self) -> u64 {
        (self.get_page() as u64 - 1) * self.get_per_page() as u64
    }

    pub fn get_limit(&self) -> u32 {
        self.get_per_page()
    }
}

impl PaginationInfo {
    pub fn new(current_page: u32, per_page: u32, total: i64) -> Self {
        let total_pages = if total == 0 {
            1
        } else {
            ((total as f64) / (per_page as f64)).ceil() as u32
        };

        Self {
            current_page,
            per_page,
            total,
            total_pages,
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, params: &PaginationParams, total: i64) -> Self {
        let pagination = PaginationInfo::new(params.get_page(), params.get_per_page(), total);

        Self { items, pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_params() {
        let params = PaginationParams {
            page: Some(2),
            per_page: Some(10),
            search: None,
        };
        assert_eq!(params.get_page(), 2);
        assert_eq!(params.get_per_page(), 10);
        assert_eq!(params.get_offset(), 10);
        assert_eq!(params.get_limit(), 10);
    }

    #[test]
    fn test_pagination_params_defaults() {
        let params = PaginationParams {
            page: None,
            per_page: None,
            search: None,
        };
        assert_eq!(params.get_page(), 1);
        assert_eq!(params.get_per_page(), 20);
        assert_eq!(params.get_offset(), 0);
    }

    #[test]
    fn test_pagination_page_enorme_sans_debordement() {
        // page fournie par le client: la pire valeur possible ne doit pas
        // faire paniquer le calcul de l'offset
        let params = PaginationParams {
            page: Some(u32::MAX),
            per_page: Some(100),
            search: None,
        };
        assert_eq!(params.get_offset(), (u32::MAX as u64 - 1) * 100);
    }

    #[test]
    fn test_pagination_info() {
        let info = PaginationInfo::new(2, 10, 25);
        assert_eq!(info.total_pages, 3);

        let vide = PaginationInfo::new(1, 10, 0);
        assert_eq!(vide.total_pages, 1);
    }
}
