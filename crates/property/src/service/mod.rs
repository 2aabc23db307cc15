mod property;

pub use self::property::PropertyService;
