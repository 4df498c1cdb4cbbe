//! Discrete random variables for belief networks.
//!
//! A [`Variable`] has a name, an index which determines its position among other variables, and a
//! domain of named states. Collections of variables can be put in index order with
//! [`order_variables`], and states can be translated to their position in the domain with
//! [`state_index`].
//!
//! ```
//! use brml_variables::order_variables;
//! use brml_variables::state_index;
//! use brml_variables::Variable;
//!
//! let butler = Variable::new("butler", 2, ["murderer", "notmurderer"]);
//! let maid = Variable::new("maid", 0, ["murderer", "notmurderer"]);
//!
//! let ordered = order_variables([butler.clone(), maid.clone()]);
//! assert_eq!(vec![maid, butler.clone()], ordered);
//!
//! assert_eq!(Ok(1), state_index(&butler, "notmurderer"));
//! ```

pub(crate) mod asserts;
mod error;
mod ordering;
mod variable;

pub use error::*;
pub use ordering::*;
pub use variable::*;
