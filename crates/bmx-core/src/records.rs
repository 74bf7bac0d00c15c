//! # Interop Records
//!
//! Host-side mirrors of two Fortran derived types. `My` is the minimal
//! single-integer record. `Ttt` exercises every field shape the interop
//! layer produces for one scalar kind: a plain value, a pointer and an
//! allocatable at ranks 0 through 3.
//!
//! Pointer and allocatable fields are `Option`: `None` means unassociated
//! or unallocated, which is distinct from an associated empty array.
//!
//! Defaults match the shapes the Fortran side initialises: `i1` has three
//! elements, `i2` is 3 × 2 and `i3` is 3 × 2 × 1, all `false`.

use serde::{Deserialize, Serialize};

use crate::container::{filled_array, filled_matrix, filled_tensor, BoolArray, BoolMatrix, BoolTensor};

/// Single-integer record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct My {
    pub a: i32,
}

crate::deep_eq_record!(My { a });

/// Every field shape of the boolean kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ttt {
    pub i0: bool,
    pub ip0: Option<bool>,
    pub ia0: Option<bool>,
    pub i1: BoolArray,
    pub ip1: Option<BoolArray>,
    pub ia1: Option<BoolArray>,
    pub i2: BoolMatrix,
    pub ip2: Option<BoolMatrix>,
    pub ia2: Option<BoolMatrix>,
    pub i3: BoolTensor,
    pub ip3: Option<BoolTensor>,
    pub ia3: Option<BoolTensor>,
}

crate::deep_eq_record!(Ttt {
    i0, ip0, ia0, i1, ip1, ia1, i2, ip2, ia2, i3, ip3, ia3,
});

impl Default for Ttt {
    fn default() -> Self {
        Self {
            i0: false,
            ip0: None,
            ia0: None,
            i1: filled_array(false, 3),
            ip1: None,
            ia1: None,
            i2: filled_matrix(false, 3, 2),
            ip2: None,
            ia2: None,
            i3: filled_tensor(false, 3, 2, 1),
            ip3: None,
            ia3: None,
        }
    }
}

impl PartialEq for My {
    fn eq(&self, other: &Self) -> bool {
        crate::DeepEq::deep_eq(self, other)
    }
}

impl PartialEq for Ttt {
    fn eq(&self, other: &Self) -> bool {
        crate::DeepEq::deep_eq(self, other)
    }
}
