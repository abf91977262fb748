//! The populate routine and descriptor listing.

use tracing::{debug, trace, warn};

use crate::descriptor::FieldDescriptor;
use crate::error::{Error, Result};
use crate::record::Destination;

/// Populates `dest` from the string accessor `get`.
///
/// Each exported field is looked up once, in declaration order, under its
/// uppercased name. An empty string from `get` means the value is absent:
/// required fields are then collected as missing, fields with a default are
/// converted from the default, and the rest keep their current value. There is
/// no way to set a field to an explicit empty string.
///
/// Fields are assigned as they are converted, so when the call fails part
/// way through, fields before the failing one keep their new values and later
/// fields are left untouched.
///
/// # Errors
///
/// - [`Error::InvalidDestinationKind`] if `dest` is not a record.
/// - [`Error::InvalidFieldKind`] if a value reaches a field of unsupported type.
/// - [`Error::ParseInt`] or [`Error::ParseBool`] for the first value or list
///   element that fails to parse.
/// - [`Error::MissingFields`] listing every required field without a value,
///   reported only when no earlier error aborted the pass.
pub fn populate<D, F>(dest: &mut D, mut get: F) -> Result<()>
where
    D: Destination + ?Sized,
    F: FnMut(&str) -> String,
{
    let record = dest
        .as_record_mut()
        .map_err(|kind| Error::InvalidDestinationKind { kind })?;

    let mut missing = Vec::new();
    for (index, field) in record.fields().into_iter().enumerate() {
        if !field.is_exported() {
            trace!(field = field.name(), "skipping private config field");
            continue;
        }

        let key = field.key();
        let mut input = get(&key);
        if input.is_empty() {
            if field.is_required() {
                debug!(%key, "required config field is missing");
                missing.push(key);
                continue;
            }
            match field.default_value() {
                Some(default) => {
                    debug!(%key, "using default for config field");
                    input = default.to_owned();
                }
                None => continue,
            }
        } else {
            debug!(%key, kind = %field.kind(), "resolved config field");
        }

        let value = field.kind().convert(field.name(), &input)?;
        record.assign(index, value).map_err(|rejected| {
            Error::invalid_field_kind(field.name(), rejected.kind().to_string())
        })?;
    }

    if missing.is_empty() {
        Ok(())
    } else {
        warn!(keys = %missing.join(", "), "missing required config fields");
        Err(Error::MissingFields { keys: missing })
    }
}

/// Lists the field descriptors of `dest` in declaration order.
///
/// # Errors
///
/// Returns [`Error::InvalidDestinationKind`] if `dest` is not a record.
pub fn describe<D>(dest: &D) -> Result<Vec<FieldDescriptor>>
where
    D: Destination + ?Sized,
{
    dest.as_record()
        .map(|record| record.fields())
        .map_err(|kind| Error::InvalidDestinationKind { kind })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::kind::{DestinationKind, FieldKind};
    use crate::record::Record;
    use crate::value::FieldValue;

    #[derive(Debug, Default, PartialEq)]
    struct MyConf {
        foo: String,
        bar: i64,
        on: bool,
        def: String,
        some: Vec<String>,
        some_int: Vec<i64>,
        some_bool: Vec<bool>,
        ignored: bool,
    }

    impl Record for MyConf {
        fn fields(&self) -> Vec<FieldDescriptor> {
            vec![
                FieldDescriptor::new("foo", FieldKind::String).required(),
                FieldDescriptor::new("bar", FieldKind::Int),
                FieldDescriptor::new("on", FieldKind::Bool),
                FieldDescriptor::new("def", FieldKind::String).with_default("somedefault"),
                FieldDescriptor::new("some", FieldKind::StringList),
                FieldDescriptor::new("some_int", FieldKind::IntList),
                FieldDescriptor::new("some_bool", FieldKind::BoolList),
                FieldDescriptor::new("ignored", FieldKind::Bool).private(),
            ]
        }

        fn assign(
            &mut self,
            index: usize,
            value: FieldValue,
        ) -> std::result::Result<(), FieldValue> {
            match (index, value) {
                (0, FieldValue::String(v)) => self.foo = v,
                (1, FieldValue::Int(v)) => self.bar = v,
                (2, FieldValue::Bool(v)) => self.on = v,
                (3, FieldValue::String(v)) => self.def = v,
                (4, FieldValue::StringList(v)) => self.some = v,
                (5, FieldValue::IntList(v)) => self.some_int = v,
                (6, FieldValue::BoolList(v)) => self.some_bool = v,
                (7, FieldValue::Bool(v)) => self.ignored = v,
                (_, other) => return Err(other),
            }
            Ok(())
        }
    }

    impl Destination for MyConf {
        fn kind(&self) -> DestinationKind {
            DestinationKind::Struct
        }

        fn as_record(&self) -> std::result::Result<&dyn Record, DestinationKind> {
            Ok(self)
        }

        fn as_record_mut(
            &mut self,
        ) -> std::result::Result<&mut dyn Record, DestinationKind> {
            Ok(self)
        }
    }

    fn accessor(pairs: &[(&str, &str)]) -> impl Fn(&str) -> String {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned().unwrap_or_default()
    }

    #[test]
    fn populates_scalars_and_defaults() {
        let mut conf = MyConf::default();
        populate(&mut conf, accessor(&[("FOO", "hehe"), ("BAR", "3"), ("ON", "TRUE")]))
            .expect("populate");

        assert_eq!(conf.foo, "hehe");
        assert_eq!(conf.bar, 3);
        assert!(conf.on);
        assert_eq!(conf.def, "somedefault");
        assert!(conf.some.is_empty());
    }

    #[test]
    fn lookup_keys_are_uppercased_and_case_sensitive() {
        let mut conf = MyConf::default();
        populate(&mut conf, accessor(&[("FOO", "hehe"), ("BAr", "3"), ("on", "TRUE")]))
            .expect("populate");

        assert_eq!(conf.bar, 0);
        assert!(!conf.on);
    }

    #[test]
    fn private_fields_are_never_queried() {
        let seen = RefCell::new(Vec::new());
        let mut conf = MyConf::default();
        populate(&mut conf, |key: &str| {
            seen.borrow_mut().push(key.to_owned());
            match key {
                "FOO" => "hehe".to_owned(),
                _ => "true".to_owned(),
            }
        })
        .expect_err("BAR is not an int");

        let mut conf = MyConf::default();
        populate(&mut conf, |key: &str| {
            seen.borrow_mut().push(key.to_owned());
            if key == "FOO" { "hehe".to_owned() } else { String::new() }
        })
        .expect("populate");

        assert!(!seen.borrow().iter().any(|key| key == "IGNORED"));
        assert!(!conf.ignored);
    }

    #[test]
    fn accessor_called_once_per_exported_field_in_order() {
        let mut seen = Vec::new();
        let mut conf = MyConf::default();
        let _ = populate(&mut conf, |key: &str| {
            seen.push(key.to_owned());
            String::new()
        });

        assert_eq!(
            seen,
            ["FOO", "BAR", "ON", "DEF", "SOME", "SOME_INT", "SOME_BOOL"]
        );
    }

    #[test]
    fn missing_required_fields_are_aggregated() {
        let mut conf = MyConf::default();
        let err = populate(&mut conf, accessor(&[("BAR", "3"), ("ON", "true")]))
            .expect_err("FOO is required");

        assert!(matches!(&err, Error::MissingFields { keys } if keys == &["FOO"]));
        assert_eq!(err.to_string(), "missing config fields: FOO");
        assert_eq!(conf.bar, 3);
        assert!(conf.on);
    }

    #[test]
    fn conversion_error_wins_over_missing_fields() {
        let mut conf = MyConf::default();
        let err = populate(&mut conf, accessor(&[("BAR", "sup")])).expect_err("bad int");
        assert!(matches!(err, Error::ParseInt { .. }));
    }

    #[test]
    fn abort_keeps_earlier_assignments() {
        let mut conf = MyConf::default();
        let err = populate(
            &mut conf,
            accessor(&[("FOO", "hehe"), ("BAR", "3"), ("ON", "damn"), ("SOME", "a,b")]),
        )
        .expect_err("bad bool");

        assert!(matches!(err, Error::ParseBool { .. }));
        assert_eq!(conf.foo, "hehe");
        assert_eq!(conf.bar, 3);
        assert_eq!(conf.def, "");
        assert!(conf.some.is_empty());
    }

    #[test]
    fn list_element_errors_abort() {
        let mut conf = MyConf::default();
        let err = populate(
            &mut conf,
            accessor(&[("FOO", "hehe"), ("SOME_INT", "yes,no")]),
        )
        .expect_err("bad int list");
        assert!(matches!(err, Error::ParseInt { .. }));

        let mut conf = MyConf::default();
        let err = populate(
            &mut conf,
            accessor(&[("FOO", "hehe"), ("SOME_BOOL", "yes,no")]),
        )
        .expect_err("bad bool list");
        assert!(matches!(err, Error::ParseBool { .. }));
    }

    #[test]
    fn populates_lists() {
        let mut conf = MyConf::default();
        populate(
            &mut conf,
            accessor(&[
                ("FOO", "hehe"),
                ("SOME", "yes,no"),
                ("SOME_INT", "1,2,3,4"),
                ("SOME_BOOL", "true,false,true"),
            ]),
        )
        .expect("populate");

        assert_eq!(conf.some, ["yes", "no"]);
        assert_eq!(conf.some_int, [1, 2, 3, 4]);
        assert_eq!(conf.some_bool, [true, false, true]);
    }

    #[test]
    fn populate_is_idempotent_across_fresh_records() {
        let get = accessor(&[("FOO", "hehe"), ("SOME_INT", "5,6")]);
        let mut first = MyConf::default();
        let mut second = MyConf::default();
        populate(&mut first, &get).expect("first");
        populate(&mut second, &get).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_record_destinations() {
        let mut map: HashMap<String, String> = HashMap::new();
        let err = populate(&mut map, accessor(&[("M", "hi")])).expect_err("map");
        assert_eq!(err.to_string(), "invalid kind for config: map");

        let mut list: Vec<String> = Vec::new();
        let err = populate(&mut list, accessor(&[])).expect_err("slice");
        assert!(matches!(
            err,
            Error::InvalidDestinationKind {
                kind: DestinationKind::Slice
            }
        ));
    }

    #[test]
    fn describe_lists_fields_in_order() {
        let fields = describe(&MyConf::default()).expect("describe");
        let names: Vec<_> = fields.iter().map(FieldDescriptor::name).collect();
        assert_eq!(names[..3], ["foo", "bar", "on"]);
        assert_eq!(fields.len(), 8);

        let err = describe(&Vec::<i64>::new()).expect_err("slice");
        assert!(matches!(err, Error::InvalidDestinationKind { .. }));
    }
}
