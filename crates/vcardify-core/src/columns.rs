//! Column names of the contact export.
//!
//! Scalar columns appear once per row. Repeating groups use the
//! `"<Group> <index> - <Field>"` scheme with a 1-based, contiguous index.

pub const NAME: &str = "Name";
pub const NAME_PREFIX: &str = "Name Prefix";
pub const GIVEN_NAME: &str = "Given Name";
pub const ADDITIONAL_NAME: &str = "Additional Name";
pub const FAMILY_NAME: &str = "Family Name";
pub const NAME_SUFFIX: &str = "Name Suffix";
pub const BIRTHDAY: &str = "Birthday";
pub const NICKNAME: &str = "Nickname";
pub const NOTES: &str = "Notes";
pub const GROUP_MEMBERSHIP: &str = "Group Membership";

pub const EMAIL_GROUP: &str = "E-mail";
pub const PHONE_GROUP: &str = "Phone";
pub const WEBSITE_GROUP: &str = "Website";
pub const ADDRESS_GROUP: &str = "Address";

pub const VALUE: &str = "Value";
pub const TYPE: &str = "Type";

/// Joins several values stored in a single cell.
pub const MULTI_VALUE_SEPARATOR: &str = " ::: ";
/// Leading marker on a type label that flags the entry as primary.
pub const STAR_MARKER: &str = "* ";

/// Fields of one `Address N` group.
pub mod address {
    pub const PO_BOX: &str = "PO Box";
    pub const EXTENDED: &str = "Extended Address";
    pub const STREET: &str = "Street";
    pub const CITY: &str = "City";
    pub const REGION: &str = "Region";
    pub const POSTAL_CODE: &str = "Postal Code";
    pub const COUNTRY: &str = "Country";
    pub const FORMATTED: &str = "Formatted";
    pub const TYPE: &str = "Type";
}
