//! Shared array storage.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use asin_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

use super::Value;
use crate::errors::{index_out_of_range, invalid_index_type, EvalResult};

/// A reference-counted, interior-mutable list of values.
///
/// Cloning an `ArrayRef` clones the handle, not the elements. Equality
/// compares elements; arrays that contain themselves compare equal once
/// a pair of arrays recurs.
#[derive(Clone, Default)]
pub struct ArrayRef(Rc<RefCell<Vec<Value>>>);

impl ArrayRef {
    pub fn new(items: Vec<Value>) -> Self {
        ArrayRef(Rc::new(RefCell::new(items)))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn borrow(&self) -> Ref<'_, Vec<Value>> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, Vec<Value>> {
        self.0.borrow_mut()
    }

    /// Shallow copy of the elements.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Whether both handles point at the same storage.
    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn as_ptr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Map an index value to a position, counting negative indices from
    /// the end. Valid indices are `-len..len`.
    pub fn resolve_index(&self, index: &Value) -> EvalResult<usize> {
        let Value::Int(i) = index else {
            return Err(invalid_index_type(index));
        };
        let len = self.len();
        let position = if *i < 0 {
            usize::try_from(i.unsigned_abs())
                .ok()
                .and_then(|back| len.checked_sub(back))
        } else {
            usize::try_from(*i).ok().filter(|&pos| pos < len)
        };
        position.ok_or_else(|| index_out_of_range(*i, self))
    }

    /// `arr[index]`
    pub fn get(&self, index: &Value) -> EvalResult<Value> {
        let position = self.resolve_index(index)?;
        Ok(self.0.borrow()[position].clone())
    }

    /// `arr[index] = value`
    pub fn set(&self, index: &Value, value: Value) -> EvalResult<()> {
        let position = self.resolve_index(index)?;
        self.0.borrow_mut()[position] = value;
        Ok(())
    }
}

/// Pairs of arrays already under comparison.
pub(crate) type VisitedPairs = FxHashSet<(*const (), *const ())>;

impl PartialEq for ArrayRef {
    fn eq(&self, other: &Self) -> bool {
        same_elements(self, other, &mut VisitedPairs::default())
    }
}

fn same_elements(a: &ArrayRef, b: &ArrayRef, visited: &mut VisitedPairs) -> bool {
    if a.ptr_eq(b) || !visited.insert((a.as_ptr(), b.as_ptr())) {
        return true;
    }
    let (left, right) = (a.borrow(), b.borrow());
    let equal = left.len() == right.len()
        && left.iter().zip(right.iter()).all(|pair| match pair {
            (Value::Array(x), Value::Array(y)) => {
                ensure_sufficient_stack(|| same_elements(x, y, visited))
            }
            (x, y) => x == y,
        });
    equal
}

// The last handle to a deeply nested array would otherwise drop its
// children recursively. Uniquely owned children are emptied into a work
// list instead, so each nested drop only frees an empty vector.
impl Drop for ArrayRef {
    fn drop(&mut self) {
        let Some(mut pending) = take_if_unique(self) else {
            return;
        };
        while let Some(value) = pending.pop() {
            if let Value::Array(child) = value {
                if let Some(mut grandchildren) = take_if_unique(&child) {
                    pending.append(&mut grandchildren);
                }
            }
        }
    }
}

/// The elements of `array`, moved out, when no other handle shares them.
fn take_if_unique(array: &ArrayRef) -> Option<Vec<Value>> {
    if Rc::strong_count(&array.0) != 1 {
        return None;
    }
    array
        .0
        .try_borrow_mut()
        .ok()
        .map(|mut items| std::mem::take(&mut *items))
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayRef({})", Value::Array(self.clone()))
    }
}
