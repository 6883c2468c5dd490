use super::common::{opt_string, require_string};
use crate::engine::runtime::{CallCtx, Error};
use crate::model::XdmNode;
use crate::uri::AnyUri;
use crate::xdm::{XdmAtomicValue, XdmItem, XdmSequence};

pub(super) fn resolve_uri_fn<N: XdmNode>(
    ctx: &CallCtx,
    args: &[XdmSequence<N>],
) -> Result<XdmSequence<N>, Error> {
    let Some(rel) = opt_string(&args[0])? else {
        return Ok(vec![]);
    };
    let rel = AnyUri::new(rel);
    if !rel.is_valid() {
        return Err(Error::InvalidUri(rel.into_string()));
    }
    let base = match args.get(1) {
        Some(arg) => {
            let base = AnyUri::new(require_string(arg, "resolve-uri")?);
            if !base.is_valid() {
                return Err(Error::InvalidUri(base.into_string()));
            }
            base
        }
        None => ctx
            .resolution
            .base_uri
            .clone()
            .map_or(AnyUri::EMPTY, AnyUri::new),
    };
    let resolved = base.resolve(&rel)?;
    Ok(vec![XdmItem::Atomic(XdmAtomicValue::AnyUri(
        resolved.into_string(),
    ))])
}
