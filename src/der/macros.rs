macro_rules! der_err {
    ($kind:expr, $($args:tt)*) => ({
        $crate::der::DerError::new($kind, format!($($args)*))
    })
}

macro_rules! from_sequence {
    ($seq_name:ident) => (
        impl $crate::der::FromTlv for $seq_name {
            fn from_tlv(tag: $crate::der::Tag, value: &[u8]) -> $crate::der::DerResult<$seq_name> {
                match tag {
                    $crate::der::Tag::Sequence => {
                        let seq_parser = $crate::der::reader::DerReader::new(value);
                        let result: $seq_name = $seq_name::from_seq(seq_parser)?;
                        Ok(result)
                    }
                    _ => der_err!($crate::der::DerErrorKind::InvalidTag,
                                  "unexpected tag: {:?}",
                                  tag),
                }
            }
        }
    )
}

macro_rules! from_value {
    ($ty_name:ty: $base_tag:pat) => (
        impl $crate::der::FromTlv for $ty_name {
            fn from_tlv(tag: $crate::der::Tag, value: &[u8]) -> $crate::der::DerResult<$ty_name> {
                match tag {
                    $base_tag => $crate::der::FromValue::from_value(value),
                    _ => der_err!($crate::der::DerErrorKind::InvalidTag,
                                  "unexpected tag: {:?}",
                                  tag),
                }
            }
        }
    )
}

macro_rules! ctx_sp {
    (P, $e:expr) => (
        $crate::der::Tag::Primitive($e, $crate::der::TagClass::ContextSpecific)
    );
    (C, $e:expr) => (
        $crate::der::Tag::Constructed($e, $crate::der::TagClass::ContextSpecific)
    );
}

macro_rules! sequence {
    (
        $(#[$a:meta])*
        struct $seq_name:ident {
            $(
                $item_name:ident: $item_ty:ty,
            )+
        }
    ) => (
        sequence_opts!(
            $(#[$a])*
            struct $seq_name {
                $(
                    $item_name(): $item_ty,
                )+
            }
        );
    )
}

macro_rules! sequence_opts {
    (
        $(#[$a:meta])*
        struct $seq_name:ident {
            $(
                $item_name:ident($($opts:tt)*): $item_ty:ty,
            )+
        }
    ) => (
        $(#[$a])*
        #[derive(Debug)]
        pub struct $seq_name {
            $(
                pub $item_name: $item_ty,
            )+
        }

        from_sequence!($seq_name);

        impl $seq_name {
            fn from_seq(mut parser: $crate::der::reader::DerReader)
            -> $crate::der::DerResult<$seq_name> {
                $(
                    let $item_name: $item_ty = sequence_item!($item_ty, parser, $($opts)*);
                )+

                if let Some((tag, value)) = parser.peek_tlv()? {
                    return der_err!($crate::der::DerErrorKind::InvalidTag,
                                    "should be no element left, found {:?} in {}",
                                    (tag, value),
                                    stringify!($seq_name));
                }

                Ok($seq_name {
                    $(
                        $item_name,
                    )+
                })
            }
        }
    )
}

macro_rules! sequence_item {
    ($t:ty, $parser:expr,) => ({
        let (tag, value) = $parser.next_tlv()?;
        let result: $t = $crate::der::FromTlv::from_tlv(tag, value)?;
        result
    });
    ($t:ty, $parser:expr, OPTIONAL, $($tag:path),+) => ({
        match $parser.peek_tlv()? {
            None => None,
            Some((tag, value)) => {
                if $(tag == $tag)||+ {
                    $parser.bump();
                    // `$t` is `Option<T>`
                    let result: $t = Some($crate::der::FromTlv::from_tlv(tag, value)?);
                    result
                } else {
                    None
                }
            }
        }
    });
    // any remaining element, whatever its tag.
    ($t:ty, $parser:expr, OPTIONAL_ANY) => ({
        match $parser.peek_tlv()? {
            None => None,
            Some((tag, value)) => {
                $parser.bump();
                let result: $t = Some($crate::der::FromTlv::from_tlv(tag, value)?);
                result
            }
        }
    });
    ($t:ty, $parser:expr, DEFAULT, $default:expr, $($tag:path),+) => ({
        match $parser.peek_tlv()? {
            None => $default,
            Some((tag, value)) => {
                if $(tag == $tag)||+ {
                    $parser.bump();
                    let result: $t = $crate::der::FromTlv::from_tlv(tag, value)?;
                    // NOTE: DER requires `result != $default`,
                    // but invalid cases are found in practice:
                    // https://bugzilla.mozilla.org/show_bug.cgi?id=1031093
                    // a viewer has to show them anyway, so just log it.
                    if result == $default {
                        debug!("value identical to default: {:?}", result);
                    }
                    result
                } else {
                    $default
                }
            }
        }
    });
    ($t:ty, $parser:expr, IMPLICIT_OPTIONAL[$cls:ident:$id:expr], $orig_tag:path) => ({
        match $parser.peek_tlv()? {
            None => None,
            Some((tag, value)) => {
                if tag == ctx_sp!($cls, $id) {
                    $parser.bump();
                    let result: $t = Some($crate::der::FromTlv::from_tlv($orig_tag, value)?);
                    result
                } else {
                    None
                }
            }
        }
    });
    ($t:ty, $parser:expr, EXPLICIT_OPTIONAL[$cls:ident:$id:expr]) => ({
        $parser.explicit(ctx_sp!($cls, $id),
            |tag, value: &[u8]| {
                let result = $crate::der::FromTlv::from_tlv(tag, value)?;
                Ok(Some(result))
            },
            || Ok(None)
        )?
    });
    ($t:ty, $parser:expr, EXPLICIT_DEFAULT[$cls:ident:$id:expr], $def:expr) => ({
        $parser.explicit(ctx_sp!($cls, $id),
            |tag, value: &[u8]| {
                let result = $crate::der::FromTlv::from_tlv(tag, value)?;
                Ok(result)
            },
            || Ok($def)
        )?
    });
}

macro_rules! sequence_of {
    (
        struct $seq_name:ident = $item_ty:ident($len_min:expr)
    ) => (
        #[derive(Debug)]
        pub struct $seq_name {
            pub seq: Vec<$item_ty>,
        }

        impl $crate::der::FromTlv for $seq_name {
            fn from_tlv(tag: $crate::der::Tag, value: &[u8]) -> $crate::der::DerResult<$seq_name> {
                match tag {
                    $crate::der::Tag::Sequence => {
                        let seq_parser = $crate::der::reader::DerReader::new(value);
                        let value: $seq_name = $seq_name::from_seq(seq_parser)?;
                        Ok(value)
                    }
                    _ => der_err!($crate::der::DerErrorKind::InvalidTag,
                                  "expected Seq, unexpected tag: {:?}",
                                  tag),
                }
            }
        }

        impl $seq_name {
            fn from_seq(mut parser: $crate::der::reader::DerReader)
            -> $crate::der::DerResult<$seq_name> {
                let mut seq: Vec<$item_ty> = Vec::new();

                while !parser.is_eof() {
                    let (tag, value) = parser.next_tlv()?;
                    let item: $item_ty = $crate::der::FromTlv::from_tlv(tag, value)?;
                    seq.push(item);
                }

                let len_min: usize = $len_min;

                if seq.len() < len_min {
                    return der_err!($crate::der::DerErrorKind::InvalidVal,
                                    "sequence shorter than {}",
                                    len_min);
                }

                Ok($seq_name {
                    seq,
                })
            }
        }
    )
}

macro_rules! bit_string_fields {
    (
        struct $name:ident {
            $(
                $bit_name:ident($i:expr),
            )+
        }
    ) => (
        #[derive(Debug, Default, PartialEq)]
        pub struct $name {
            $(
                pub $bit_name: bool,
            )+
        }

        from_value!($name: $crate::der::Tag::BitString);

        impl $crate::der::FromValue for $name {
            fn from_value(value: &[u8]) -> $crate::der::DerResult<$name> {
                let bits: $crate::der::BitString = $crate::der::FromValue::from_value(value)?;

                Ok($name {
                    $(
                        $bit_name: bits.bit($i),
                    )+
                })
            }
        }
    )
}

// macro for enum based on one-byte integer
// e.g. `INTEGER { two-prime(0), multi(1) }`
macro_rules! enum_integer {
    (
        enum $enum_name:ident {
            $(
                $name:ident = $val:pat,
            )+
        }
    ) => (
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub enum $enum_name {
            $(
                $name,
            )+
        }

        from_value!($enum_name: $crate::der::Tag::Integer);

        impl $crate::der::FromValue for $enum_name {
            fn from_value(value: &[u8]) -> $crate::der::DerResult<$enum_name> {
                let len = value.len();
                if len != 1 {
                    return der_err!($crate::der::DerErrorKind::InvalidVal,
                                    "expected length 1, found {}", len);
                }
                let value = match value[0] {
                     $(
                        $val => $enum_name::$name,
                     )+
                     other => return der_err!($crate::der::DerErrorKind::InvalidVal,
                                              "unknown value: {}", other),
                };
                Ok(value)
            }
        }
    )
}
