use std::rc::Rc;
use std::sync::Arc;

use log::trace;
use log::warn;

use crate::Variable;
use crate::VariableError;

/// A value which carries the index of a [`Variable`], and can therefore be ordered by
/// [`order_variables`].
pub trait Indexed {
    fn variable_index(&self) -> usize;
}

impl Indexed for Variable {
    fn variable_index(&self) -> usize {
        self.index()
    }
}

impl<T: Indexed + ?Sized> Indexed for &T {
    fn variable_index(&self) -> usize {
        (**self).variable_index()
    }
}

impl<T: Indexed + ?Sized> Indexed for Box<T> {
    fn variable_index(&self) -> usize {
        (**self).variable_index()
    }
}

impl<T: Indexed + ?Sized> Indexed for Rc<T> {
    fn variable_index(&self) -> usize {
        (**self).variable_index()
    }
}

impl<T: Indexed + ?Sized> Indexed for Arc<T> {
    fn variable_index(&self) -> usize {
        (**self).variable_index()
    }
}

/// Collect the given variables into a new [`Vec`], sorted ascending by their index.
///
/// The sort is stable: variables which share an index keep the order in which they were given.
/// Sharing an index is not expected, and is reported through a warning. Use
/// [`order_variables_strict`] to turn it into an error instead.
///
/// To keep the original collection intact, pass an iterator over references.
///
/// # Example
/// ```
/// use brml_variables::order_variables;
/// use brml_variables::Variable;
///
/// let butler = Variable::new("butler", 2, ["murderer", "notmurderer"]);
/// let maid = Variable::new("maid", 0, ["murderer", "notmurderer"]);
/// let suspects = [butler, maid];
///
/// let ordered = order_variables(&suspects);
/// assert_eq!(vec![&suspects[1], &suspects[0]], ordered);
/// ```
pub fn order_variables<Var: Indexed>(variables: impl IntoIterator<Item = Var>) -> Vec<Var> {
    let ordered = sort_by_index(variables);

    if let Some(index) = find_shared_index(&ordered) {
        warn!("Ordering variables of which more than one has index {index}");
    }

    ordered
}

/// Same as [`order_variables`], but fails with [`VariableError::DuplicateIndex`] if two of the
/// given variables share an index.
pub fn order_variables_strict<Var: Indexed>(
    variables: impl IntoIterator<Item = Var>,
) -> Result<Vec<Var>, VariableError> {
    let ordered = sort_by_index(variables);

    match find_shared_index(&ordered) {
        Some(index) => Err(VariableError::DuplicateIndex { index }),
        None => Ok(ordered),
    }
}

fn sort_by_index<Var: Indexed>(variables: impl IntoIterator<Item = Var>) -> Vec<Var> {
    let mut ordered = variables.into_iter().collect::<Vec<_>>();
    trace!("Ordering {} variables by index", ordered.len());

    // `sort_by_key` is stable, which keeps variables with an equal index in input order.
    ordered.sort_by_key(|variable| variable.variable_index());
    ordered
}

/// Assumes `ordered` is sorted by index.
fn find_shared_index<Var: Indexed>(ordered: &[Var]) -> Option<usize> {
    ordered
        .windows(2)
        .find(|pair| pair[0].variable_index() == pair[1].variable_index())
        .map(|pair| pair[0].variable_index())
}
