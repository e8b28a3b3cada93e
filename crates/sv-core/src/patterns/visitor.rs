//! Visitor pattern: the two halves of a double-dispatch protocol.
//!
//! A family of data kinds implements [`Visitable`] once per visitor family
//! `V`; `accept` is pure routing and forwards `self`, fully typed, to the
//! handler on `V` that belongs to its own kind. Operations implement
//! [`Visitor`] to declare what a handler produces, and the family-specific
//! handler trait (see `sv_shapes::ShapeVisitor`) to provide one handler per
//! kind.
//!
//! Because the handler trait has no default methods, an operation that
//! forgets a kind does not compile. Adding an operation touches no data
//! kind; adding a kind touches every operation.

/// An operation that can be dispatched over a closed family of kinds.
///
/// Only the result type lives here; the per-kind handlers are declared by
/// the family's own visitor trait.
pub trait Visitor {
    /// What every handler of this operation returns.
    type Output;
}

/// An object that routes a visitor of family `V` to its own handler.
pub trait Visitable<V: Visitor + ?Sized> {
    /// Call exactly one handler on `visitor`, chosen by the kind of `self`.
    fn accept(&self, visitor: &mut V) -> V::Output;
}

/// Let every item of `items` accept `visitor`, in iteration order.
///
/// The outputs are returned in the same order as the items were yielded.
pub fn visit_all<'a, T, V, I>(items: I, visitor: &mut V) -> Vec<V::Output>
where
    I: IntoIterator<Item = &'a T>,
    T: Visitable<V> + 'a,
    V: Visitor + ?Sized,
{
    items.into_iter().map(|item| item.accept(visitor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal two-kind family used to exercise the protocol in isolation.
    struct Ping(u32);
    struct Pong(&'static str);

    trait PingPongVisitor: Visitor {
        fn visit_ping(&mut self, ping: &Ping) -> Self::Output;
        fn visit_pong(&mut self, pong: &Pong) -> Self::Output;
    }

    impl<V: PingPongVisitor + ?Sized> Visitable<V> for Ping {
        fn accept(&self, visitor: &mut V) -> V::Output {
            visitor.visit_ping(self)
        }
    }

    impl<V: PingPongVisitor + ?Sized> Visitable<V> for Pong {
        fn accept(&self, visitor: &mut V) -> V::Output {
            visitor.visit_pong(self)
        }
    }

    #[derive(Default)]
    struct Log {
        calls: Vec<String>,
    }

    impl Visitor for Log {
        type Output = usize;
    }

    impl PingPongVisitor for Log {
        fn visit_ping(&mut self, ping: &Ping) -> usize {
            self.calls.push(format!("ping {}", ping.0));
            self.calls.len()
        }

        fn visit_pong(&mut self, pong: &Pong) -> usize {
            self.calls.push(format!("pong {}", pong.0));
            self.calls.len()
        }
    }

    #[test]
    fn accept_routes_to_own_handler() {
        let mut log = Log::default();
        Pong("b").accept(&mut log);
        Ping(7).accept(&mut log);
        assert_eq!(log.calls, vec!["pong b", "ping 7"]);
    }

    #[test]
    fn visit_all_preserves_order() {
        let pings = [Ping(3), Ping(1), Ping(2)];
        let mut log = Log::default();
        let outputs = visit_all(&pings, &mut log);
        assert_eq!(outputs, vec![1, 2, 3]);
        assert_eq!(log.calls, vec!["ping 3", "ping 1", "ping 2"]);
    }

    #[test]
    fn visit_all_on_empty_input() {
        let none: Vec<Ping> = Vec::new();
        let mut log = Log::default();
        assert!(visit_all(&none, &mut log).is_empty());
        assert!(log.calls.is_empty());
    }
}
