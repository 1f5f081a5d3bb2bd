pub mod results;
pub mod scan;
pub mod template;

pub use results::{simplify, Datatype, FieldMapping, ResultMapping, SimpleResults, SimpleValue};
pub use template::{
    InjectTarget, Prefix, QueryError, QuerySpec, QueryState, QueryTemplate, QueryText, VariableDoc,
};
