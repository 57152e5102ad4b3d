//! One wallpaper mechanism per desktop session family.

pub(super) mod feh;
pub(super) mod gnome;
pub(super) mod kde;
pub(super) mod mate;
pub(super) mod xfce;
