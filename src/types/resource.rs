//! JSON:API-style envelopes: every success body is `{"data": ...}` and every record is rendered
//! as `{"id", "type", "attributes"}`.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Document<T> {
    pub data: T,
}

impl<T> Document<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Resource<A> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub attributes: A,
}

impl<A> Resource<A> {
    pub fn new(id: i32, kind: &str, attributes: A) -> Self {
        Self { id: id.to_string(), kind: kind.to_string(), attributes }
    }
}

/// Renders a list of models, keeping their order.
pub fn collection<M, A>(models: Vec<M>) -> Document<Vec<Resource<A>>>
where
    M: Into<Resource<A>>,
{
    Document::new(models.into_iter().map(Into::into).collect())
}
