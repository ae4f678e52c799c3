// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Compiled-in catalog records.
//!
//! Records reference each other by identifier; [`Catalog::from_seed`] resolves
//! and validates those references once at startup.
//!
//! [`Catalog::from_seed`]: crate::model::catalog::Catalog::from_seed

const COVER_1: &str = "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=300&h=300&fit=crop";
const COVER_2: &str = "https://images.unsplash.com/photo-1458560871784-56d23406c091?w=300&h=300&fit=crop";
const COVER_3: &str = "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=300&h=300&fit=crop";
const COVER_4: &str = "https://images.unsplash.com/photo-1571330735066-03aaa9429d89?w=300&h=300&fit=crop";
const COVER_5: &str = "https://images.unsplash.com/photo-1446776653964-20c1d3a81b06?w=300&h=300&fit=crop";
const COVER_6: &str = "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=300&h=300&fit=crop";
const COVER_7: &str = "https://images.unsplash.com/photo-1506157786151-b8491531f063?w=300&h=300&fit=crop";

const AUDIO_BASE: &str = "https://www.soundhelix.com/examples/mp3";

#[derive(Debug, Clone)]
pub(crate) struct TrackRecord {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) artist: &'static str,
    pub(crate) album: &'static str,
    pub(crate) duration: u64,
    pub(crate) cover: &'static str,
    pub(crate) audio_url: String,
}

#[derive(Debug, Clone)]
pub(crate) struct PlaylistRecord {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) cover: &'static str,
    pub(crate) tracks: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub(crate) struct ArtistRecord {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) image: &'static str,
    pub(crate) followers: u64,
    pub(crate) monthly_listeners: u64,
    pub(crate) top_tracks: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub(crate) struct AlbumRecord {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) artist: &'static str,
    pub(crate) year: u16,
    pub(crate) genre: &'static str,
    pub(crate) cover: &'static str,
    pub(crate) tracks: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub(crate) struct PodcastRecord {
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) host: &'static str,
    pub(crate) description: &'static str,
    pub(crate) cover: &'static str,
    pub(crate) episodes: u32,
    pub(crate) category: &'static str,
    pub(crate) is_following: bool,
}

/// The raw, unvalidated catalog.
///
/// `library_tracks` doubles as the default play queue and the contents of the
/// fallback playlist; `extra_tracks` are only reachable through featured
/// playlists, artists, albums and search.
#[derive(Debug, Clone, Default)]
pub(crate) struct Seed {
    pub(crate) library_tracks: Vec<TrackRecord>,
    pub(crate) extra_tracks: Vec<TrackRecord>,
    pub(crate) playlists: Vec<PlaylistRecord>,
    pub(crate) featured_playlists: Vec<PlaylistRecord>,
    pub(crate) artists: Vec<ArtistRecord>,
    pub(crate) albums: Vec<AlbumRecord>,
    pub(crate) podcasts: Vec<PodcastRecord>,
    pub(crate) genres: Vec<&'static str>,
}

fn track(
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    album: &'static str,
    duration: u64,
    cover: &'static str,
) -> TrackRecord {
    TrackRecord {
        id,
        title,
        artist,
        album,
        duration,
        cover,
        audio_url: format!("{AUDIO_BASE}/SoundHelix-Song-{id}.mp3"),
    }
}

fn playlist(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    cover: &'static str,
    tracks: &[&'static str],
) -> PlaylistRecord {
    PlaylistRecord {
        id,
        name,
        description,
        cover,
        tracks: tracks.to_vec(),
    }
}

/// Builds the application's built-in seed data.
pub(crate) fn builtin() -> Seed {
    Seed {
        library_tracks: vec![
            track("1", "Blinding Lights", "The Weeknd", "After Hours", 200, COVER_1),
            track("2", "Watermelon Sugar", "Harry Styles", "Fine Line", 174, COVER_2),
            track("3", "Levitating", "Dua Lipa", "Future Nostalgia", 203, COVER_3),
            track("4", "Good 4 U", "Olivia Rodrigo", "SOUR", 178, COVER_4),
            track("5", "Stay", "The Kid LAROI & Justin Bieber", "Stay", 141, COVER_5),
            track("6", "Heat Waves", "Glass Animals", "Dreamland", 238, COVER_6),
            track("7", "Peaches", "Justin Bieber ft. Daniel Caesar & Giveon", "Justice", 198, COVER_7),
            track("8", "drivers license", "Olivia Rodrigo", "SOUR", 242, COVER_4),
        ],
        extra_tracks: vec![
            track("9", "Shape of You", "Ed Sheeran", "÷ (Divide)", 234, COVER_1),
            track("10", "Someone Like You", "Adele", "21", 285, COVER_2),
            track("11", "Uptown Funk", "Mark Ronson ft. Bruno Mars", "Uptown Special", 270, COVER_4),
            track("12", "Perfect", "Ed Sheeran", "÷ (Divide)", 263, COVER_3),
            track("13", "Believer", "Imagine Dragons", "Evolve", 204, COVER_5),
            track("14", "Thinking Out Loud", "Ed Sheeran", "x (Multiply)", 281, COVER_6),
            track("15", "Radioactive", "Imagine Dragons", "Night Visions", 187, COVER_7),
            track("16", "Hello", "Adele", "25", 295, COVER_4),
        ],
        playlists: vec![
            playlist("liked", "Liked Songs", "Your favorite tracks", COVER_1, &["1", "2", "3", "4"]),
            playlist("recent", "Recently Played", "Your recently played songs", COVER_2, &["3", "4", "5", "6"]),
            playlist("discover", "Discover Weekly", "Your weekly mixtape of fresh music", COVER_3, &["2", "3", "4", "5"]),
            playlist("chill", "Chill Vibes", "Relax and unwind with these chill tracks", COVER_4, &["4", "5", "6", "7"]),
        ],
        featured_playlists: vec![
            playlist("pop-hits", "Pop Hits", "The biggest pop songs right now", COVER_1, &["1", "2", "9", "10"]),
            playlist("indie-mix", "Indie Mix", "Fresh indie tracks for your day", COVER_2, &["3", "6", "13", "15"]),
            playlist("workout", "Workout Beats", "High energy songs to power your workout", COVER_4, &["4", "5", "11", "13"]),
            playlist("acoustic", "Acoustic Favorites", "Stripped down versions of your favorite songs", COVER_3, &["7", "8", "12", "14"]),
        ],
        artists: vec![
            ArtistRecord {
                id: "weeknd",
                name: "The Weeknd",
                description: "Canadian singer, songwriter, and record producer",
                image: COVER_1,
                followers: 25_000_000,
                monthly_listeners: 85_000_000,
                top_tracks: vec!["1", "9"],
            },
            ArtistRecord {
                id: "harry-styles",
                name: "Harry Styles",
                description: "English singer, songwriter, and actor",
                image: COVER_2,
                followers: 18_000_000,
                monthly_listeners: 65_000_000,
                top_tracks: vec!["2", "12"],
            },
            ArtistRecord {
                id: "dua-lipa",
                name: "Dua Lipa",
                description: "English singer and songwriter",
                image: COVER_3,
                followers: 22_000_000,
                monthly_listeners: 72_000_000,
                top_tracks: vec!["3"],
            },
            ArtistRecord {
                id: "ed-sheeran",
                name: "Ed Sheeran",
                description: "English singer-songwriter",
                image: COVER_6,
                followers: 30_000_000,
                monthly_listeners: 88_000_000,
                top_tracks: vec!["9", "12", "14"],
            },
            ArtistRecord {
                id: "olivia-rodrigo",
                name: "Olivia Rodrigo",
                description: "American singer-songwriter and actress",
                image: COVER_4,
                followers: 12_000_000,
                monthly_listeners: 55_000_000,
                top_tracks: vec!["4", "8"],
            },
            ArtistRecord {
                id: "adele",
                name: "Adele",
                description: "English singer-songwriter",
                image: COVER_5,
                followers: 20_000_000,
                monthly_listeners: 45_000_000,
                top_tracks: vec!["10", "16"],
            },
        ],
        albums: vec![
            AlbumRecord {
                id: "after-hours",
                title: "After Hours",
                artist: "The Weeknd",
                year: 2020,
                genre: "Pop",
                cover: COVER_1,
                tracks: vec!["1"],
            },
            AlbumRecord {
                id: "fine-line",
                title: "Fine Line",
                artist: "Harry Styles",
                year: 2019,
                genre: "Pop Rock",
                cover: COVER_2,
                tracks: vec!["2"],
            },
            AlbumRecord {
                id: "future-nostalgia",
                title: "Future Nostalgia",
                artist: "Dua Lipa",
                year: 2020,
                genre: "Disco Pop",
                cover: COVER_3,
                tracks: vec!["3"],
            },
            AlbumRecord {
                id: "sour",
                title: "SOUR",
                artist: "Olivia Rodrigo",
                year: 2021,
                genre: "Alternative Pop",
                cover: COVER_4,
                tracks: vec!["4", "8"],
            },
            AlbumRecord {
                id: "divide",
                title: "÷ (Divide)",
                artist: "Ed Sheeran",
                year: 2017,
                genre: "Pop Folk",
                cover: COVER_6,
                tracks: vec!["9", "12"],
            },
            AlbumRecord {
                id: "25",
                title: "25",
                artist: "Adele",
                year: 2015,
                genre: "Soul Pop",
                cover: COVER_5,
                tracks: vec!["16"],
            },
        ],
        podcasts: vec![
            PodcastRecord {
                id: "joe-rogan",
                title: "The Joe Rogan Experience",
                host: "Joe Rogan",
                description: "Long form conversations with a wide range of guests",
                cover: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=400&h=400&fit=crop",
                episodes: 2000,
                category: "Comedy",
                is_following: true,
            },
            PodcastRecord {
                id: "smartless",
                title: "SmartLess",
                host: "Jason Bateman, Sean Hayes, Will Arnett",
                description: "Three friends surprise each other with guest interviews",
                cover: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400&h=400&fit=crop",
                episodes: 150,
                category: "Comedy",
                is_following: false,
            },
            PodcastRecord {
                id: "lex-fridman",
                title: "Lex Fridman Podcast",
                host: "Lex Fridman",
                description: "Conversations about science, technology, history, philosophy and the nature of intelligence",
                cover: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?w=400&h=400&fit=crop",
                episodes: 400,
                category: "Technology",
                is_following: true,
            },
            PodcastRecord {
                id: "tim-ferriss",
                title: "The Tim Ferriss Show",
                host: "Tim Ferriss",
                description: "Deconstruct world-class performers to find the tools and tactics you can use",
                cover: "https://images.unsplash.com/photo-1581092795360-fd1ca04f0952?w=400&h=400&fit=crop",
                episodes: 700,
                category: "Business",
                is_following: false,
            },
            PodcastRecord {
                id: "serial",
                title: "Serial",
                host: "Sarah Koenig",
                description: "Investigative journalism in podcast form",
                cover: "https://images.unsplash.com/photo-1605810230434-7631ac76ec81?w=400&h=400&fit=crop",
                episodes: 50,
                category: "True Crime",
                is_following: true,
            },
            PodcastRecord {
                id: "conan-obrien",
                title: "Conan O'Brien Needs a Friend",
                host: "Conan O'Brien",
                description: "Conan talks to people he finds funny about things that make him curious",
                cover: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?w=400&h=400&fit=crop",
                episodes: 200,
                category: "Comedy",
                is_following: false,
            },
        ],
        genres: vec![
            "Pop",
            "Hip-Hop",
            "Rock",
            "Electronic",
            "Country",
            "R&B",
            "Jazz",
            "Classical",
        ],
    }
}
