use super::CodeTable;
use crate::bits::BitString;
use crate::errors::HuffmanError;
use crate::Symbol;

/// Concatenate the code of every symbol in `input`, in input order.
///
/// Every symbol is looked up before any bit is written, so an unknown symbol never
/// yields partial output.
pub fn encode<S: Symbol>(input: &[S], codes: &CodeTable<S>) -> Result<BitString, HuffmanError> {
    if input.is_empty() {
        return Err(HuffmanError::InvalidInput);
    }

    let mut total_bits = 0;
    let mut lookups = Vec::with_capacity(input.len());
    for (position, symbol) in input.iter().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or_else(|| HuffmanError::UnknownSymbol {
                position,
                symbol: format!("{:?}", symbol),
            })?;
        total_bits += code.len();
        lookups.push(code);
    }

    let mut output = BitString::with_capacity(total_bits);
    for code in lookups {
        output.extend_from(code);
    }
    vlog!(symbols = input.len(), bits = output.len(), "encoded input");
    Ok(output)
}
