//! Transport layer: endpoints and wire-format details (serialization/deserialization).

mod endpoint;
mod fault;
mod message;
mod message_list;
mod price;

pub use endpoint::{API_FORMAT, message_endpoint, message_list_endpoint, resolve_page_uri};
pub use fault::decode_api_fault_json_response;
pub use message::{TransportError, decode_message_json_response, encode_send_message_form};
pub use message_list::{decode_message_list_json_response, encode_message_filter_query};
