//! Wiring test for the query-broker composition.
//!
//! A hub owns one event whose payload is a query refined in place: each
//! subscriber adjusts the value through a `Cell`, in subscription order, and
//! the caller reads the result once the raise returns. Refiners subscribe on
//! attach and either retire explicitly or simply get dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use weakcast::{Disposable, Event, Subscription};

/// A limit lookup, refined in place by the hub's subscribers.
struct LimitQuery {
    route: &'static str,
    limit: Cell<u32>,
}

/// Central broadcast point. Carries no policy of its own.
struct LimitHub {
    queries: Event<LimitQuery>,
}

impl LimitHub {
    fn new() -> Self {
        Self {
            queries: Event::new(),
        }
    }

    fn effective_limit(&self, route: &'static str, base: u32) -> u32 {
        let query = LimitQuery {
            route,
            limit: Cell::new(base),
        };
        self.queries.raise(&query);
        query.limit.get()
    }
}

/// Doubles the limit for one route while attached.
struct Doubler {
    route: &'static str,
    grant: RefCell<Option<Subscription<LimitQuery>>>,
}

impl Doubler {
    fn attach(hub: &LimitHub, route: &'static str) -> Rc<Self> {
        let refiner = Rc::new(Self {
            route,
            grant: RefCell::new(None),
        });
        let sub = hub.queries.add_handler(&refiner, Self::apply);
        *refiner.grant.borrow_mut() = Some(sub);
        refiner
    }

    fn apply(&self, query: &LimitQuery) {
        if query.route == self.route {
            query.limit.set(query.limit.get() * 2);
        }
    }

    fn retire(&self) {
        if let Some(grant) = self.grant.borrow_mut().take() {
            grant.dispose();
        }
    }
}

/// Adds a flat bonus to the limit for one route while attached.
struct Bonus {
    route: &'static str,
    amount: u32,
    grant: RefCell<Option<Subscription<LimitQuery>>>,
}

impl Bonus {
    fn attach(hub: &LimitHub, route: &'static str, amount: u32) -> Rc<Self> {
        let refiner = Rc::new(Self {
            route,
            amount,
            grant: RefCell::new(None),
        });
        let sub = hub.queries.add_handler(&refiner, Self::apply);
        *refiner.grant.borrow_mut() = Some(sub);
        refiner
    }

    fn apply(&self, query: &LimitQuery) {
        if query.route == self.route {
            query.limit.set(query.limit.get() + self.amount);
        }
    }
}

#[test]
fn test_unrefined_query_returns_base() {
    let hub = LimitHub::new();

    assert_eq!(hub.effective_limit("api", 10), 10);
}

#[test]
fn test_refiners_compose_in_subscription_order() {
    let hub = LimitHub::new();
    let _double = Doubler::attach(&hub, "api");
    let _bonus = Bonus::attach(&hub, "api", 3);

    assert_eq!(hub.effective_limit("api", 10), 23, "double first, then add");

    let flipped = LimitHub::new();
    let _bonus = Bonus::attach(&flipped, "api", 3);
    let _double = Doubler::attach(&flipped, "api");

    assert_eq!(flipped.effective_limit("api", 10), 26, "add first, then double");
}

#[test]
fn test_same_refiner_stacks_per_attachment() {
    let hub = LimitHub::new();
    let _a = Doubler::attach(&hub, "api");
    let _b = Doubler::attach(&hub, "api");

    assert_eq!(hub.effective_limit("api", 5), 20);
}

#[test]
fn test_refiner_ignores_other_routes() {
    let hub = LimitHub::new();
    let _double = Doubler::attach(&hub, "api");

    assert_eq!(hub.effective_limit("web", 10), 10);
    assert_eq!(hub.effective_limit("api", 10), 20);
}

#[test]
fn test_retire_restores_baseline() {
    let hub = LimitHub::new();
    let double = Doubler::attach(&hub, "api");

    assert_eq!(hub.effective_limit("api", 10), 20);

    double.retire();
    double.retire();

    assert_eq!(hub.effective_limit("api", 10), 10);
    assert!(hub.queries.is_empty(), "a retired refiner leaves no entry behind");
}

#[test]
fn test_dropped_refiner_stops_applying() {
    let hub = LimitHub::new();
    let double = Doubler::attach(&hub, "api");

    assert_eq!(hub.effective_limit("api", 10), 20);

    drop(double);

    assert_eq!(
        hub.effective_limit("api", 10),
        10,
        "a dropped refiner must be skipped, not applied"
    );
    assert!(
        hub.queries.is_empty(),
        "the dead entry must be swept after the raise"
    );
}
