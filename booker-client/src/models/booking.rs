use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Booking payload as the service stores and echoes it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(default)]
    pub additionalneeds: String,
}

impl Booking {
    pub fn new(
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        totalprice: i64,
        depositpaid: bool,
        checkin: NaiveDate,
        checkout: NaiveDate,
    ) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            totalprice,
            depositpaid,
            bookingdates: BookingDates { checkin, checkout },
            additionalneeds: String::new(),
        }
    }

    pub fn with_additional_needs(mut self, needs: impl Into<String>) -> Self {
        self.additionalneeds = needs.into();
        self
    }

    /// Apply a partial update the way the service does: set fields replace, unset fields stay.
    pub fn apply(&mut self, patch: &BookingPatch) {
        if let Some(firstname) = &patch.firstname {
            self.firstname = firstname.clone();
        }
        if let Some(lastname) = &patch.lastname {
            self.lastname = lastname.clone();
        }
        if let Some(totalprice) = patch.totalprice {
            self.totalprice = totalprice;
        }
        if let Some(depositpaid) = patch.depositpaid {
            self.depositpaid = depositpaid;
        }
        if let Some(dates) = &patch.bookingdates {
            self.bookingdates = dates.clone();
        }
        if let Some(needs) = &patch.additionalneeds {
            self.additionalneeds = needs.clone();
        }
    }
}

/// Stay dates, serialised as `YYYY-MM-DD`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

/// Response body of `POST /booking`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CreatedBooking {
    pub bookingid: i64,
    pub booking: Booking,
}

/// Element of the `GET /booking` listing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct BookingId {
    pub bookingid: i64,
}

/// Sparse update for `PATCH /booking/{id}`. Only fields that are set are sent.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totalprice: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depositpaid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookingdates: Option<BookingDates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

impl BookingPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    pub fn totalprice(mut self, totalprice: i64) -> Self {
        self.totalprice = Some(totalprice);
        self
    }

    pub fn depositpaid(mut self, depositpaid: bool) -> Self {
        self.depositpaid = Some(depositpaid);
        self
    }

    pub fn bookingdates(mut self, checkin: NaiveDate, checkout: NaiveDate) -> Self {
        self.bookingdates = Some(BookingDates { checkin, checkout });
        self
    }

    pub fn additionalneeds(mut self, needs: impl Into<String>) -> Self {
        self.additionalneeds = Some(needs.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
