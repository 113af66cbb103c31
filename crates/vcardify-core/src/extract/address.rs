use crate::columns::{address, ADDRESS_GROUP};
use crate::domain::Address;
use crate::extract::strip_star;
use crate::row::{GroupProbe, RowDecoder};
use crate::types::TypeMapper;

/// Builds one address per `Address N - ...` slot. A slot exists as soon as
/// any of its columns does; every field is optional.
pub fn extract_addresses(decoder: &mut RowDecoder<'_>, mapper: &mut TypeMapper) -> Vec<Address> {
    let mut addresses = Vec::new();

    for slot in decoder.group(ADDRESS_GROUP, GroupProbe::AnyField) {
        let mut field = |name: &str| decoder.take_or_empty(&slot.column(name)).to_string();
        let mut parsed = Address {
            po_box: field(address::PO_BOX),
            extended: field(address::EXTENDED),
            street: field(address::STREET),
            city: field(address::CITY),
            region: field(address::REGION),
            postal_code: field(address::POSTAL_CODE),
            country: field(address::COUNTRY),
            formatted: field(address::FORMATTED),
            kind: None,
        };

        let (label, _) = strip_star(decoder.take_or_empty(&slot.column(address::TYPE)));
        parsed.kind = mapper.map(label);
        addresses.push(parsed);
    }

    addresses
}
