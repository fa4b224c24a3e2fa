//! Short display codes for CQL column types.
//!
//! The host shows a compact code next to every column (`#` for integers,
//! `s` for strings, `[]` for list-like collections, ...). Types reach us in
//! one of two shapes, depending on which path produced them:
//! - a driver type-class name, i.e. the Cassandra marshal class of a typed
//!   driver value (`Int32Type`, `ListType`, `org.apache.cassandra.db.marshal.ReversedType(...)`),
//! - a textual CQL type name as stored in `system_schema.columns` (`int`, `text`).
//!
//! Both are resolved by [label_for], which never fails: anything unknown
//! becomes [UNKNOWN_TYPE_CODE].

use scylla::cluster::metadata::{CollectionType, ColumnType, NativeType};

/// Code returned for types no table knows about.
pub const UNKNOWN_TYPE_CODE: &str = "?";

/// Raw type representation as received from one of the metadata paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawType<'a> {
    /// Driver type-class name. Resolved with an exact match first,
    /// then by the first table key contained in the name.
    ClassName(&'a str),
    /// Textual CQL type name. Resolved by exact match only.
    CqlName(&'a str),
}

/// Owned counterpart of [RawType], stored in schema snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawTypeBuf {
    /// See [RawType::ClassName].
    ClassName(String),
    /// See [RawType::CqlName].
    CqlName(String),
}

impl RawTypeBuf {
    /// Borrows this type as a [RawType].
    pub fn as_raw(&self) -> RawType<'_> {
        match self {
            RawTypeBuf::ClassName(name) => RawType::ClassName(name),
            RawTypeBuf::CqlName(name) => RawType::CqlName(name),
        }
    }
}

impl From<&ColumnType<'_>> for RawTypeBuf {
    fn from(typ: &ColumnType<'_>) -> Self {
        RawTypeBuf::ClassName(class_name(typ).to_owned())
    }
}

// Order matters: the substring fallback picks the first key contained in the
// class name. Entries past InetAddressType cover classes with no earlier key
// embedded in their name.
const CLASS_NAME_CODES: &[(&str, &str)] = &[
    ("ListType", "[]"),
    ("SortedSet", "[]"),
    ("MapType", "{}"),
    ("SetType", "[]"),
    ("TupleType", "()"),
    ("VarcharType", "s"),
    ("DateType", "d"),
    ("TimeType", "s"),
    ("TimestampType", "s"),
    ("AsciiType", "s"),
    ("BytesType", "b"),
    ("UTF8Type", "s"),
    ("BooleanType", "t/f"),
    ("DecimalType", "#.#"),
    ("DoubleType", "#.#"),
    ("FloatType", "#.#"),
    ("Int32Type", "#"),
    ("LongType", "##"),
    ("UUIDType", "uuid"),
    ("TimeUUIDType", "uuid"),
    ("UserType", "ut"),
    ("InetAddressType", "ip"),
    ("ShortType", "#"),
    ("ByteType", "#"),
    ("IntegerType", "#"),
    ("CounterColumnType", "##"),
    ("SimpleDateType", "d"),
    ("DurationType", "str"),
    ("VectorType", "[]"),
];

const CQL_NAME_CODES: &[(&str, &str)] = &[
    ("ascii", "s"),
    ("bigint", "#"),
    ("blob", "blob"),
    ("boolean", "t/f"),
    ("counter", "#"),
    ("date", "d"),
    ("decimal", "#.#"),
    ("double", "#.#"),
    // Unit is not modeled.
    ("duration", "str"),
    ("float", "#.#"),
    ("inet", "ip"),
    ("int", "#"),
    ("smallint", "#"),
    ("text", "s"),
    ("time", "s"),
    ("timestamp", "s"),
    ("timeuuid", "uuid"),
    ("tinyint", "#"),
    ("uuid", "uuid"),
    ("varchar", "s"),
    ("varint", "#"),
];

/// Resolves a raw type to its short display code.
///
/// ```
/// # use cql_adapter::types::{label_for, RawType};
/// assert_eq!(label_for(RawType::ClassName("Int32Type")), "#");
/// assert_eq!(label_for(RawType::ClassName("ReversedType(Int32Type)")), "#");
/// assert_eq!(label_for(RawType::CqlName("text")), "s");
/// assert_eq!(label_for(RawType::CqlName("list<text>")), "?");
/// ```
pub fn label_for(raw: RawType<'_>) -> &'static str {
    match raw {
        RawType::ClassName(name) => label_for_class_name(name),
        RawType::CqlName(name) => label_for_cql_name(name),
    }
}

/// Resolves a driver type-class name.
pub fn label_for_class_name(name: &str) -> &'static str {
    exact(CLASS_NAME_CODES, name)
        .or_else(|| {
            CLASS_NAME_CODES
                .iter()
                .find(|(key, _)| name.contains(key))
                .map(|(_, code)| *code)
        })
        .unwrap_or(UNKNOWN_TYPE_CODE)
}

/// Resolves a textual CQL type name.
pub fn label_for_cql_name(name: &str) -> &'static str {
    exact(CQL_NAME_CODES, name).unwrap_or(UNKNOWN_TYPE_CODE)
}

/// Resolves a typed driver column type through its class name.
pub fn label_for_column_type(typ: &ColumnType<'_>) -> &'static str {
    label_for_class_name(class_name(typ))
}

fn exact(table: &[(&str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, code)| *code)
}

/// Simple name of the Cassandra marshal class backing a driver column type.
///
/// Only the outermost type is named. Frozenness does not change the class
/// name, as the host does not distinguish frozen collections.
pub fn class_name(typ: &ColumnType<'_>) -> &'static str {
    match typ {
        ColumnType::Native(native) => native_class_name(native),
        ColumnType::Collection { typ, .. } => match typ {
            CollectionType::List(_) => "ListType",
            CollectionType::Set(_) => "SetType",
            CollectionType::Map(_, _) => "MapType",
            #[allow(unreachable_patterns)]
            _ => "CollectionType",
        },
        ColumnType::Tuple(_) => "TupleType",
        ColumnType::UserDefinedType { .. } => "UserType",
        ColumnType::Vector { .. } => "VectorType",
        #[allow(unreachable_patterns)]
        _ => "AbstractType",
    }
}

fn native_class_name(native: &NativeType) -> &'static str {
    match native {
        NativeType::Ascii => "AsciiType",
        NativeType::Boolean => "BooleanType",
        NativeType::Blob => "BytesType",
        NativeType::Counter => "CounterColumnType",
        NativeType::Date => "SimpleDateType",
        NativeType::Decimal => "DecimalType",
        NativeType::Double => "DoubleType",
        NativeType::Duration => "DurationType",
        NativeType::Float => "FloatType",
        NativeType::Int => "Int32Type",
        NativeType::BigInt => "LongType",
        NativeType::Text => "UTF8Type",
        NativeType::Timestamp => "TimestampType",
        NativeType::Inet => "InetAddressType",
        NativeType::SmallInt => "ShortType",
        NativeType::TinyInt => "ByteType",
        NativeType::Time => "TimeType",
        NativeType::Timeuuid => "TimeUUIDType",
        NativeType::Uuid => "UUIDType",
        NativeType::Varint => "IntegerType",
        #[allow(unreachable_patterns)]
        _ => "AbstractType",
    }
}
