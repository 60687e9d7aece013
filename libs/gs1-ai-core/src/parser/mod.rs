//! The surface-syntax ingesters. Each of [`bracketed`] and
//! [`digital_link`] produces the canonical `#`-delimited element string;
//! [`element_string`] is the single validator and extracted-AI producer
//! every one of them ultimately feeds through.

pub mod bracketed;
pub mod digital_link;
pub mod element_string;
pub mod percent;
