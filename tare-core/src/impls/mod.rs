mod boxed;
mod duration;
mod map;
mod numeric;
mod option;
mod text;
mod vec;
