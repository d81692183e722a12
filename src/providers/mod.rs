pub mod youtube;

pub use youtube::YouTubeDataApi;
