//! Traits connecting configuration records to the populate routine.

use std::collections::{BTreeMap, HashMap, VecDeque};

use crate::descriptor::FieldDescriptor;
use crate::kind::DestinationKind;
use crate::value::FieldValue;

/// A configuration record whose fields can be populated from strings.
///
/// Implemented by `#[derive(Record)]`, or by hand for explicit registration.
pub trait Record {
    /// Returns one descriptor per field, in declaration order.
    ///
    /// Private fields are included (marked as not exported) so that indices
    /// line up with the declaration order.
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// Stores `value` into the field at `index`.
    ///
    /// # Errors
    ///
    /// Hands the value back when the field at `index` cannot hold it.
    fn assign(&mut self, index: usize, value: FieldValue) -> Result<(), FieldValue>;
}

/// Anything that may be passed to `populate`.
///
/// Records resolve to themselves; other containers report their kind so the
/// caller gets a descriptive error instead of a silent no-op.
pub trait Destination {
    /// Kind of this destination.
    fn kind(&self) -> DestinationKind;

    /// Borrows the destination as a record.
    ///
    /// # Errors
    ///
    /// Returns the actual [`DestinationKind`] when this is not a record.
    fn as_record(&self) -> Result<&dyn Record, DestinationKind>;

    /// Mutably borrows the destination as a record.
    ///
    /// # Errors
    ///
    /// Returns the actual [`DestinationKind`] when this is not a record.
    fn as_record_mut(&mut self) -> Result<&mut dyn Record, DestinationKind>;
}

macro_rules! not_a_record {
    ($kind:expr => $([$($param:ident),*] $ty:ty);+ $(;)?) => {
        $(
            impl<$($param),*> Destination for $ty {
                fn kind(&self) -> DestinationKind {
                    $kind
                }

                fn as_record(&self) -> Result<&dyn Record, DestinationKind> {
                    Err($kind)
                }

                fn as_record_mut(&mut self) -> Result<&mut dyn Record, DestinationKind> {
                    Err($kind)
                }
            }
        )+
    };
}

not_a_record!(DestinationKind::Map =>
    [K, V, S] HashMap<K, V, S>;
    [K, V] BTreeMap<K, V>;
);

not_a_record!(DestinationKind::Slice =>
    [T] Vec<T>;
    [T] VecDeque<T>;
    [T] [T];
);
