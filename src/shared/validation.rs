use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating a citizen's full name
    /// Letters (Romanian diacritics included) separated by spaces, hyphens, apostrophes or dots
    /// - Valid: "Ion Popescu", "Ana-Maria Ionescu", "Ștefan Țurcanu", "D. Vasilescu"
    /// - Invalid: "Ion2", " Ion", "Ion  Popescu", "@admin"
    pub static ref FULL_NAME_REGEX: Regex =
        Regex::new(r"^\p{L}+\.?(?:[ '\-]\p{L}+\.?)*$").unwrap();

    /// Regex for validating phone numbers: optional leading '+', then digits,
    /// spaces or hyphens
    /// - Valid: "0251 416 235", "+40-722-123-456"
    /// - Invalid: "phone", "0251/416", ""
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 \-]*$").unwrap();
}
