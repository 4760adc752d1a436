use std::borrow::Cow;

use crate::countrynumberparser::{errors::WrongFormatError, helper_types::ExtractedPart};

/// First parsing stage. Receives the whole (country code free) number and
/// claims the area code plus at most one separator following it.
pub trait AreaCodeExtractor: Send + Sync {
    fn extract_area_code<'a>(&self, rest: Cow<'a, str>) -> Result<ExtractedPart<'a>, WrongFormatError>;
}

/// Second parsing stage. Claims the main number and leaves whatever it
/// decides is the extension in the returned rest. Never fails.
pub trait MainNumberExtractor: Send + Sync {
    fn extract_main_number<'a>(&self, rest: Cow<'a, str>) -> ExtractedPart<'a>;
}

/// Last parsing stage. Never fails.
pub trait ExtensionExtractor: Send + Sync {
    fn extract_extension<'a>(&self, rest: Cow<'a, str>) -> ExtractedPart<'a>;
}
