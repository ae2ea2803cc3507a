mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod pages;
pub use pages::{
    About, Admin, AdminBlog, AdminTestimonials, Apply, Blog, BlogPost, CaregiverDashboard, Contact,
    Home, NotFound, Plans, Search, Services, Shell,
};
