/// API fetch state enum
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> From<Result<T, String>> for FetchState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(err) => Self::Error(err),
        }
    }
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&String> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_from_result() {
        let ok: FetchState<u8> = Ok(3).into();
        assert_eq!(ok.data(), Some(&3));
        assert!(!ok.is_loading());

        let failed: FetchState<u8> = Err("HTTP error: 404".to_string()).into();
        assert_eq!(failed.error().map(String::as_str), Some("HTTP error: 404"));
        assert!(failed.data().is_none());
    }
}
