use serde::{Deserialize, Serialize};

/// Acquisition channel of a customer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    #[default]
    Website,
    Email,
    Phone,
    WordOfMouth,
    #[serde(other)]
    Other,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Website,
        Channel::Email,
        Channel::Phone,
        Channel::WordOfMouth,
        Channel::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Website => "website",
            Channel::Email => "email",
            Channel::Phone => "phone",
            Channel::WordOfMouth => "word-of-mouth",
            Channel::Other => "other",
        }
    }

    pub fn next(&self) -> Channel {
        match self {
            Channel::Website => Channel::Email,
            Channel::Email => Channel::Phone,
            Channel::Phone => Channel::WordOfMouth,
            Channel::WordOfMouth => Channel::Other,
            Channel::Other => Channel::Website,
        }
    }

    pub fn prev(&self) -> Channel {
        match self {
            Channel::Website => Channel::Other,
            Channel::Email => Channel::Website,
            Channel::Phone => Channel::Email,
            Channel::WordOfMouth => Channel::Phone,
            Channel::Other => Channel::WordOfMouth,
        }
    }
}

/// A customer as served by the remote endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub channel: Channel,
    pub address: String,
    pub postal: String,
    pub city: String,
    pub province: String,
    pub country: String,
}

/// Payload envelope: `{ "customers": [...] }`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CustomerList {
    pub customers: Vec<Customer>,
}

/// Where the customer list currently stands. Exactly one is active.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Customer>),
    Errored(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Customers, if the fetch succeeded
    pub fn customers(&self) -> Option<&[Customer]> {
        match self {
            LoadState::Loaded(customers) => Some(customers),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payload() {
        let json = r#"{"customers":[{"id":1,"name":"A","email":"a@x.com","channel":"word-of-mouth",
            "address":"1 Main","postal":"M1M1M1","city":"Toronto","province":"ON","country":"CA"}]}"#;
        let list: CustomerList = serde_json::from_str(json).unwrap();
        assert_eq!(list.customers.len(), 1);
        assert_eq!(list.customers[0].channel, Channel::WordOfMouth);
        assert_eq!(list.customers[0].postal, "M1M1M1");
    }

    #[test]
    fn test_unknown_channel_is_other() {
        let channel: Channel = serde_json::from_str(r#""carrier-pigeon""#).unwrap();
        assert_eq!(channel, Channel::Other);
    }

    #[test]
    fn test_channel_cycle() {
        for channel in Channel::ALL {
            assert_eq!(channel.next().prev(), channel);
        }
        assert_eq!(Channel::Other.next(), Channel::Website);
    }
}
