//! Cart State
//!
//! Last accepted server view of the cart, and the projection of each
//! response into [`ViewPatch`] steps for the DOM layer.
//!
//! Requests take a [`Ticket`] before they are sent. With fencing on, a
//! response only touches the badge/total if its ticket is newer than the last
//! accepted aggregate ticket, and only touches a line if it is newer than the
//! last accepted ticket for that line. With fencing off, responses apply in
//! completion order.

use std::collections::BTreeMap;

use crate::models::{CartSnapshot, ProductId};

/// Monotonic request sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Quantity and subtotal of one line as last reported by the server
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineState {
    pub qty: u32,
    pub subtotal: f64,
}

/// One DOM projection step
#[derive(Debug, Clone, PartialEq)]
pub enum ViewPatch {
    Badge(u32),
    Total(f64),
    SetLine { id: ProductId, qty: u32, subtotal: f64 },
    RemoveLine(ProductId),
    Reload,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    count: u32,
    total: Option<f64>,
    lines: BTreeMap<ProductId, LineState>,
    fencing: bool,
    issued: u64,
    aggregate_seq: u64,
    line_seq: BTreeMap<ProductId, u64>,
    reload_requested: bool,
}

/// Badge is shown iff the cart holds at least one item
pub fn badge_visible(count: u32) -> bool {
    count > 0
}

impl CartState {
    pub fn new(fencing: bool) -> Self {
        Self {
            fencing,
            ..Default::default()
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn total(&self) -> Option<f64> {
        self.total
    }

    pub fn line(&self, id: &ProductId) -> Option<LineState> {
        self.lines.get(id).copied()
    }

    pub fn reload_requested(&self) -> bool {
        self.reload_requested
    }

    /// Take the next ticket for an outgoing request
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    fn accept_aggregate(&mut self, ticket: Ticket) -> bool {
        if self.fencing && ticket.0 <= self.aggregate_seq {
            return false;
        }
        self.aggregate_seq = self.aggregate_seq.max(ticket.0);
        true
    }

    fn accept_line(&mut self, id: &ProductId, ticket: Ticket) -> bool {
        let last = self.line_seq.entry(id.clone()).or_insert(0);
        if self.fencing && ticket.0 <= *last {
            return false;
        }
        *last = (*last).max(ticket.0);
        true
    }

    fn set_count(&mut self, count: u32, patches: &mut Vec<ViewPatch>) {
        self.count = count;
        patches.push(ViewPatch::Badge(count));
    }

    /// Successful `/api/cart_count`
    pub fn apply_count(&mut self, ticket: Ticket, count: u32) -> Vec<ViewPatch> {
        let mut patches = Vec::new();
        if self.accept_aggregate(ticket) {
            self.set_count(count, &mut patches);
        }
        patches
    }

    /// Successful `/api/add_to_cart`. A response without `cart_total_items`
    /// leaves the badge alone.
    pub fn apply_added(&mut self, ticket: Ticket, snap: &CartSnapshot) -> Vec<ViewPatch> {
        let mut patches = Vec::new();
        if let Some(count) = snap.cart_total_items {
            if self.accept_aggregate(ticket) {
                self.set_count(count, &mut patches);
            }
        }
        patches
    }

    /// Successful `/api/update_cart`
    pub fn apply_line_update(
        &mut self,
        ticket: Ticket,
        id: &ProductId,
        snap: &CartSnapshot,
    ) -> Vec<ViewPatch> {
        let mut patches = Vec::new();

        if let Some(qty) = snap.qty {
            if self.accept_line(id, ticket) {
                if qty == 0 {
                    self.lines.remove(id);
                    patches.push(ViewPatch::RemoveLine(id.clone()));
                } else {
                    let subtotal = snap.subtotal.unwrap_or(0.0);
                    self.lines.insert(id.clone(), LineState { qty, subtotal });
                    patches.push(ViewPatch::SetLine {
                        id: id.clone(),
                        qty,
                        subtotal,
                    });
                }
            }
        }

        if snap.total.is_none() && snap.cart_total_items.is_none() {
            return patches;
        }
        if !self.accept_aggregate(ticket) {
            return patches;
        }

        if let Some(total) = snap.total {
            self.total = Some(total);
            patches.push(ViewPatch::Total(total));
        }
        if let Some(count) = snap.cart_total_items {
            self.set_count(count, &mut patches);
            if count == 0 && !self.reload_requested {
                self.reload_requested = true;
                patches.push(ViewPatch::Reload);
            }
        }
        patches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn added(count: u32) -> CartSnapshot {
        CartSnapshot {
            success: true,
            cart_total_items: Some(count),
            ..Default::default()
        }
    }

    fn updated(qty: u32, subtotal: f64, total: f64, count: u32) -> CartSnapshot {
        CartSnapshot {
            success: true,
            cart_total_items: Some(count),
            qty: Some(qty),
            subtotal: Some(subtotal),
            total: Some(total),
            error: None,
        }
    }

    fn pid(id: u32) -> ProductId {
        ProductId::from(id)
    }

    #[test]
    fn test_add_sets_badge() {
        let mut cart = CartState::new(true);
        let ticket = cart.issue();
        let patches = cart.apply_added(ticket, &added(3));
        assert_eq!(patches, vec![ViewPatch::Badge(3)]);
        assert_eq!(cart.count(), 3);
        assert!(badge_visible(cart.count()));
    }

    #[test]
    fn test_badge_hidden_at_zero() {
        assert!(!badge_visible(0));
        assert!(badge_visible(1));
    }

    #[test]
    fn test_add_without_count_keeps_badge() {
        let mut cart = CartState::new(true);
        let t = cart.issue();
        cart.apply_count(t, 2);
        let t = cart.issue();
        let snap = CartSnapshot {
            success: true,
            ..Default::default()
        };
        assert!(cart.apply_added(t, &snap).is_empty());
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_decrement_to_zero_removes_line_and_reloads() {
        let mut cart = CartState::new(true);
        let t = cart.issue();
        let patches = cart.apply_line_update(t, &pid(7), &updated(0, 0.0, 12.5, 0));
        assert_eq!(
            patches,
            vec![
                ViewPatch::RemoveLine(pid(7)),
                ViewPatch::Total(12.5),
                ViewPatch::Badge(0),
                ViewPatch::Reload,
            ]
        );
        assert!(cart.line(&pid(7)).is_none());
        assert!(cart.reload_requested());
    }

    #[test]
    fn test_reload_requested_only_once() {
        let mut cart = CartState::new(true);
        let t1 = cart.issue();
        let t2 = cart.issue();
        let first = cart.apply_line_update(t1, &pid(1), &updated(0, 0.0, 0.0, 0));
        let second = cart.apply_line_update(t2, &pid(2), &updated(0, 0.0, 0.0, 0));
        let reloads = first
            .iter()
            .chain(second.iter())
            .filter(|p| **p == ViewPatch::Reload)
            .count();
        assert_eq!(reloads, 1);
    }

    #[test]
    fn test_increment_updates_line() {
        let mut cart = CartState::new(true);
        let t = cart.issue();
        let patches = cart.apply_line_update(t, &pid(3), &updated(2, 50.0, 80.0, 3));
        assert_eq!(
            patches[0],
            ViewPatch::SetLine {
                id: pid(3),
                qty: 2,
                subtotal: 50.0
            }
        );
        assert_eq!(cart.line(&pid(3)), Some(LineState { qty: 2, subtotal: 50.0 }));
        assert_eq!(cart.total(), Some(80.0));
        assert_eq!(cart.count(), 3);
        assert!(!cart.reload_requested());
    }

    #[test]
    fn test_stale_aggregate_is_dropped() {
        let mut cart = CartState::new(true);
        let older = cart.issue();
        let newer = cart.issue();
        cart.apply_added(newer, &added(5));
        let patches = cart.apply_added(older, &added(4));
        assert!(patches.is_empty());
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_fencing_is_per_line() {
        let mut cart = CartState::new(true);
        let for_a = cart.issue();
        let for_b = cart.issue();
        // B completes first, then the older request for A
        cart.apply_line_update(for_b, &pid(2), &updated(1, 10.0, 30.0, 3));
        let patches = cart.apply_line_update(for_a, &pid(1), &updated(2, 20.0, 25.0, 2));
        // A's own line still applies, the older aggregate does not
        assert_eq!(
            patches,
            vec![ViewPatch::SetLine {
                id: pid(1),
                qty: 2,
                subtotal: 20.0
            }]
        );
        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), Some(30.0));
    }

    #[test]
    fn test_stale_line_after_removal_does_not_resurrect() {
        let mut cart = CartState::new(true);
        let older = cart.issue();
        let newer = cart.issue();
        cart.apply_line_update(newer, &pid(9), &updated(0, 0.0, 5.0, 1));
        let patches = cart.apply_line_update(older, &pid(9), &updated(1, 5.0, 10.0, 2));
        assert!(patches.is_empty());
        assert!(cart.line(&pid(9)).is_none());
    }

    #[test]
    fn test_without_fencing_last_completion_wins() {
        let mut cart = CartState::new(false);
        let older = cart.issue();
        let newer = cart.issue();
        cart.apply_added(newer, &added(5));
        let patches = cart.apply_added(older, &added(4));
        assert_eq!(patches, vec![ViewPatch::Badge(4)]);
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_refresh_count() {
        let mut cart = CartState::new(true);
        let t = cart.issue();
        assert_eq!(cart.apply_count(t, 0), vec![ViewPatch::Badge(0)]);
        // A count refresh never reloads the page
        assert!(!cart.reload_requested());
    }
}
