pub mod generate;

pub mod prelude {
    pub use super::transactions::{Currency, Status, Transaction};
}

pub mod transactions {
    use rand::Rng;
    use serde::{Deserialize, Serialize};

    use super::generate;

    /// Domain model for a simulated card Transaction.
    ///
    /// Field names on the wire are fixed: `transaction_id`, `card_number`,
    /// `value`, `currency` and `status`.
    ///
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
    pub struct Transaction {
        #[serde(rename = "transaction_id")]
        pub id: String,
        pub card_number: String,
        pub value: f64,
        pub currency: Currency,
        pub status: Status,
    }

    impl Transaction {
        /// Creates a transaction with every field drawn from `rng`.
        ///
        /// Fields are drawn in declaration order, so a seeded `rng` always
        /// yields the same transaction.
        ///
        pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
            Self {
                id: generate::id(rng),
                card_number: generate::card_number(rng),
                value: generate::value(rng),
                currency: generate::currency(rng),
                status: generate::status(rng),
            }
        }
    }

    #[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum Currency {
        Usd,
        Eur,
        Gbp,
        Jpy,
        Aud,
        Cad,
    }

    impl Currency {
        /// Every currency a transaction can carry, in selection order.
        pub const ALL: [Currency; 6] = [
            Currency::Usd,
            Currency::Eur,
            Currency::Gbp,
            Currency::Jpy,
            Currency::Aud,
            Currency::Cad,
        ];
    }

    /// Risk classification attached to a transaction.
    ///
    #[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Status {
        Normal,
        Suspicious,
    }

}
