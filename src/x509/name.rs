use crate::der::{Tag, FromTlv, DerResult, DerReader, ObjId, Any};
use crate::der::DerErrorKind::{InvalidTag, InvalidVal};

// AttributeValue is ANY DEFINED BY type. keep it raw and decode on display,
// so an attribute with an odd string type doesn't fail the whole certificate.
sequence!(struct AttributeTypeAndValue {
    attr_type: ObjId,
    attr_value: Any,
});

impl AttributeTypeAndValue {
    /// Value as a string, if it is one of the DirectoryString types (or IA5String).
    pub fn value_str(&self) -> Option<String> {
        let Any(tag, ref value) = self.attr_value;
        match FromTlv::from_tlv(tag, value) {
            Ok(s) => Some(s),
            Err(err) => {
                debug!("attribute {} is not a string: {}", self.attr_type, err);
                None
            }
        }
    }
}

// exact octet comparison. no RFC 5280 7.1 case folding.
impl PartialEq for AttributeTypeAndValue {
    fn eq(&self, other: &AttributeTypeAndValue) -> bool {
        self.attr_type == other.attr_type && self.attr_value == other.attr_value
    }
}

// SET SIZE (1..MAX) of AttributeTypeAndValue
#[derive(Debug, PartialEq)]
pub struct RelativeDistinguishedName {
    pub set: Vec<AttributeTypeAndValue>,
}

impl FromTlv for RelativeDistinguishedName {
    fn from_tlv(tag: Tag, value: &[u8]) -> DerResult<RelativeDistinguishedName> {
        match tag {
            Tag::Set => {
                let set_parser = DerReader::new(value);
                let value: RelativeDistinguishedName = RelativeDistinguishedName::from_set(set_parser)?;
                Ok(value)
            }
            _ => der_err!(InvalidTag, "unexpected tag: {:?}", tag),
        }
    }
}

impl RelativeDistinguishedName {
    fn from_set(mut parser: DerReader) -> DerResult<RelativeDistinguishedName> {
        let mut set = Vec::new();

        // set order is not checked: a viewer shows what it gets.
        while !parser.is_eof() {
            let (tag, value) = parser.next_tlv()?;
            let item: AttributeTypeAndValue = FromTlv::from_tlv(tag, value)?;
            set.push(item);
        }

        if set.is_empty() {
            return der_err!(InvalidVal, "empty RelativeDistinguishedName");
        }

        Ok(RelativeDistinguishedName {
            set,
        })
    }
}

// Name ::= CHOICE { RdnSequence }
// RdnSequence ::= SEQUENCE OF RelativeDistinguishedName
sequence_of!(struct Name = RelativeDistinguishedName(0));

impl PartialEq for Name {
    fn eq(&self, other: &Name) -> bool {
        self.seq == other.seq
    }
}

impl Name {
    pub fn attributes(&self) -> impl Iterator<Item = &AttributeTypeAndValue> {
        self.seq.iter().flat_map(|rdn| rdn.set.iter())
    }

    /// String values of every attribute of the given type, in certificate order.
    pub fn values(&self, attr_type: &str) -> Vec<String> {
        self.attributes()
            .filter(|attr| attr.attr_type.is(attr_type))
            .filter_map(|attr| attr.value_str())
            .collect()
    }

    /// First string value of the given type.
    pub fn value(&self, attr_type: &str) -> Option<String> {
        self.values(attr_type).into_iter().next()
    }
}
