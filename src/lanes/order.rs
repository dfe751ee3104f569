use crate::network::{Link, LinkId, Network};
use crate::util::FxIndexMap;

use geo::Coord;
use rustc_hash::FxHashMap;

fn direction(network: &Network, link: &Link) -> Option<Coord> {
    let from = network.position(&link.from)?;
    let to = network.position(&link.to)?;
    Some(to.0 - from.0)
}

/// Signed angle in degrees, within `(-180, 180]`, turning from the
/// direction of `from` onto that of `to`. Left turns are positive.
pub fn turning_angle(network: &Network, from: &Link, to: &Link) -> Option<f64> {
    let a = direction(network, from)?;
    let b = direction(network, to)?;

    let dot = a.x * b.x + a.y * b.y;
    let cross = a.x * b.y - a.y * b.x;
    let angle = cross.atan2(dot).to_degrees();

    // atan2 yields -180 for a reversal approached from below.
    Some(if angle <= -180.0 { 180.0 } else { angle })
}

/// Orders the links leaving the downstream node of `link` by their
/// turning angle, assigning each a lane alignment.
///
/// Alignments are consecutive and centred on zero: with `n` links they
/// run from `-n/2` for even `n`, or `-(n-1)/2` for odd `n`, upwards, and
/// follow the angles in ascending order.
///
/// With `restrictions`, only links present there with a non-zero
/// value are ordered.
pub fn order_to_links(
    network: &Network,
    link: &Link,
    restrictions: Option<&FxHashMap<LinkId, i32>>,
) -> FxIndexMap<LinkId, i32> {
    let mut angles = network
        .out_links(&link.to)
        .filter(|out| match restrictions {
            None => true,
            Some(allowed) => allowed.get(&out.id).is_some_and(|value| *value != 0),
        })
        .filter_map(|out| Some((out.id.clone(), turning_angle(network, link, out)?)))
        .collect::<Vec<_>>();

    angles.sort_by(|(_, a), (_, b)| a.total_cmp(b));

    let lowest = -((angles.len() / 2) as i32);
    angles
        .into_iter()
        .zip(lowest..)
        .map(|((id, _), alignment)| (id, alignment))
        .collect()
}
