use sea_orm::{
    EntityTrait, Order, QueryOrder, QuerySelect, Select,
    sea_query::{Func, SimpleExpr},
};

/// Shuffled sampling for selects that hand back a few rows out of many,
/// as the content suggestion queries do.
pub trait RandomSample {
    /// Order the rows by `random()` and keep at most `n` of them.
    fn random_sample(self, n: u64) -> Self;
}

impl<E> RandomSample for Select<E>
where
    E: EntityTrait,
{
    fn random_sample(self, n: u64) -> Self {
        self.order_by(SimpleExpr::FunctionCall(Func::random()), Order::Asc)
            .limit(n)
    }
}
