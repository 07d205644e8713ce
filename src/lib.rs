pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod location;
    pub mod locationmanager;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
        pub mod easterrelatedholiday;
        pub mod offsetholiday;
        pub mod recurringholidaymanager;
    }

    pub mod holiday {
        pub mod holidayrule;
        pub mod holiday;
    }

    pub mod calendar {
        pub mod holidaycalendar;
        pub mod holidaycalendarmanager;
    }
}
