mod oriented_box;

pub use self::oriented_box::OrientedBox;
