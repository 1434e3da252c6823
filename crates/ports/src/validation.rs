// crates/ports/src/validation.rs

/// Port answering whether a country code is on the reference list.
pub trait CodeValidator {
    fn is_valid_code(&self, code: &str) -> bool;
}

/// Accepts every code; used when no reference list is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl CodeValidator for AcceptAll {
    fn is_valid_code(&self, _code: &str) -> bool {
        true
    }
}

impl<V: CodeValidator + ?Sized> CodeValidator for &V {
    fn is_valid_code(&self, code: &str) -> bool {
        (**self).is_valid_code(code)
    }
}
