//! Periphery as a doubly linked cycle over vertex ids.
//!
//! Links live in a table parallel to the vertex arena (`id - 1`), so membership,
//! successor lookup, and arc splicing touch only the vertices involved.
//!
//! Invariants
//! - `links[slot]` is `Some` exactly for ids on the boundary.
//! - `next(prev(v)) == v` for every member; the walk from `head` visits `len` ids.
//! - Iteration from `head` yields the boundary in its clockwise order.

use crate::vertex::VertexId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Link {
    prev: VertexId,
    next: VertexId,
}

/// Ordered cyclic boundary walk.
#[derive(Clone, Debug, Default)]
pub struct PeripheryRing {
    links: Vec<Option<Link>>,
    head: Option<VertexId>,
    len: usize,
}

impl PeripheryRing {
    /// Build a ring visiting `ids` in order. Repeated ids keep their first position.
    pub fn from_cycle(ids: &[VertexId]) -> Self {
        let mut order: Vec<VertexId> = Vec::with_capacity(ids.len());
        for &id in ids {
            if id.slot().is_some() && !order.contains(&id) {
                order.push(id);
            }
        }
        let mut ring = Self::default();
        let n = order.len();
        for (k, &id) in order.iter().enumerate() {
            let prev = order[(k + n - 1) % n];
            let next = order[(k + 1) % n];
            ring.set_link(id, Some(Link { prev, next }));
        }
        ring.head = order.first().copied();
        ring.len = n;
        ring
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn head(&self) -> Option<VertexId> {
        self.head
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.link(id).is_some()
    }

    #[inline]
    pub fn next(&self, id: VertexId) -> Option<VertexId> {
        self.link(id).map(|l| l.next)
    }

    #[inline]
    pub fn prev(&self, id: VertexId) -> Option<VertexId> {
        self.link(id).map(|l| l.prev)
    }

    pub fn iter(&self) -> RingIter<'_> {
        RingIter {
            ring: self,
            cur: self.head,
            remaining: self.len,
        }
    }

    /// Forward walk from `from` to `to`, both inclusive. `None` unless both are members.
    pub fn arc(&self, from: VertexId, to: VertexId) -> Option<Vec<VertexId>> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        let mut out = vec![from];
        let mut cur = from;
        while cur != to && out.len() <= self.len {
            cur = self.next(cur)?;
            out.push(cur);
        }
        Some(out)
    }

    /// Replace the strictly interior part of the arc `vp → vq` with `new`.
    ///
    /// Pre: `vp != vq`, both members, `new` not a member. Returns the removed ids.
    pub(crate) fn splice(&mut self, vp: VertexId, vq: VertexId, new: VertexId) -> Vec<VertexId> {
        let mut removed = Vec::new();
        let mut cur = self.next(vp);
        while let Some(v) = cur {
            if v == vq || removed.len() >= self.len {
                break;
            }
            cur = self.next(v);
            self.set_link(v, None);
            removed.push(v);
        }
        self.len -= removed.len();
        if let Some(h) = self.head {
            if removed.contains(&h) {
                self.head = Some(vq);
            }
        }
        if let Some(l) = self.link_mut(vp) {
            l.next = new;
        }
        if let Some(l) = self.link_mut(vq) {
            l.prev = new;
        }
        self.set_link(new, Some(Link { prev: vp, next: vq }));
        self.len += 1;
        removed
    }

    /// True if prev/next links are mutually consistent and the head walk covers `len` ids.
    pub fn is_consistent(&self) -> bool {
        let members = self.links.iter().filter(|l| l.is_some()).count();
        if members != self.len {
            return false;
        }
        let Some(head) = self.head else {
            return self.len == 0;
        };
        let mut cur = head;
        for _ in 0..self.len {
            let Some(next) = self.next(cur) else {
                return false;
            };
            if self.prev(next) != Some(cur) {
                return false;
            }
            cur = next;
        }
        cur == head
    }

    /// Point `id` forward at `next` without touching any `prev` link.
    #[cfg(test)]
    pub(crate) fn relink_next(&mut self, id: VertexId, next: VertexId) {
        if let Some(link) = self.link_mut(id) {
            link.next = next;
        }
    }

    #[inline]
    fn link(&self, id: VertexId) -> Option<&Link> {
        self.links.get(id.slot()?)?.as_ref()
    }

    #[inline]
    fn link_mut(&mut self, id: VertexId) -> Option<&mut Link> {
        self.links.get_mut(id.slot()?)?.as_mut()
    }

    fn set_link(&mut self, id: VertexId, link: Option<Link>) {
        let Some(slot) = id.slot() else {
            return;
        };
        if slot >= self.links.len() {
            self.links.resize(slot + 1, None);
        }
        self.links[slot] = link;
    }
}

/// Walk of the ring starting at its head.
pub struct RingIter<'a> {
    ring: &'a PeripheryRing,
    cur: Option<VertexId>,
    remaining: usize,
}

impl Iterator for RingIter<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cur?;
        self.remaining -= 1;
        self.cur = self.ring.next(id);
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[usize]) -> Vec<VertexId> {
        v.iter().map(|&k| VertexId(k)).collect()
    }

    #[test]
    fn arc_walks_forward_and_wraps() {
        let ring = PeripheryRing::from_cycle(&ids(&[1, 2, 3, 4, 5]));
        assert_eq!(ring.arc(VertexId(2), VertexId(4)), Some(ids(&[2, 3, 4])));
        assert_eq!(ring.arc(VertexId(4), VertexId(2)), Some(ids(&[4, 5, 1, 2])));
        assert_eq!(ring.arc(VertexId(2), VertexId(9)), None);
    }

    #[test]
    fn splice_replaces_interior() {
        let mut ring = PeripheryRing::from_cycle(&ids(&[1, 2, 3, 4, 5]));
        let removed = ring.splice(VertexId(2), VertexId(5), VertexId(6));
        assert_eq!(removed, ids(&[3, 4]));
        assert_eq!(ring.iter().collect::<Vec<_>>(), ids(&[1, 2, 6, 5]));
        assert!(!ring.contains(VertexId(3)));
        assert!(ring.is_consistent());
    }

    #[test]
    fn splice_over_head_moves_head_to_arc_end() {
        let mut ring = PeripheryRing::from_cycle(&ids(&[1, 2, 3, 4, 5]));
        ring.splice(VertexId(4), VertexId(2), VertexId(6));
        assert_eq!(ring.head(), Some(VertexId(2)));
        assert_eq!(ring.iter().collect::<Vec<_>>(), ids(&[2, 3, 4, 6]));
        assert!(ring.is_consistent());
    }

    #[test]
    fn adjacent_splice_grows_ring() {
        let mut ring = PeripheryRing::from_cycle(&ids(&[1, 2, 3]));
        let removed = ring.splice(VertexId(1), VertexId(2), VertexId(4));
        assert!(removed.is_empty());
        assert_eq!(ring.iter().collect::<Vec<_>>(), ids(&[1, 4, 2, 3]));
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn duplicates_are_dropped() {
        let ring = PeripheryRing::from_cycle(&ids(&[1, 2, 1, 3]));
        assert_eq!(ring.len(), 3);
        assert!(ring.is_consistent());
    }
}
