use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lookup::{LookupOutcome, ProductLookup};

/// Looks up one barcode. Every lookup outcome is an `Ok` result; the outcome
/// is carried in the messages and, on success, in `product`.
pub fn run(client: &ProductLookup, item_code: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match client.search_item(item_code) {
        LookupOutcome::Success(hit) => {
            result.add_message(CmdMessage::success(format!("Found: {}", hit.item_name)));
            if hit.image.is_none() {
                result.add_message(CmdMessage::warning("No product image could be fetched"));
            }
            Ok(result.with_product(hit))
        }
        LookupOutcome::DecodeFailure(reason) => {
            result.add_message(CmdMessage::warning(format!(
                "No product found for {} ({})",
                item_code, reason
            )));
            Ok(result)
        }
        LookupOutcome::TransportError(reason) => {
            result.add_message(CmdMessage::error(format!(
                "Could not reach the product search service: {}",
                reason
            )));
            Ok(result)
        }
    }
}
