use crate::repositories::PostQuery;

usecase! {
    gets : {
        pub query: super::PostQuery,
    } => {
        pub posts: Vec<entities::Post>,
    }
}

usecase! {
    get : {
        pub post_id: entities::PostId,
    } => {
        pub post: entities::Post,
    }
}

usecase! {
    submit : {
        pub new_post: entities::NewPost,
    } => {
        pub post: entities::Post,
    }
}

usecase! {
    like : {
        pub post_id: entities::PostId,
    } => {
        pub post: entities::Post,
    }
}

usecase! {
    unlike : {
        pub post_id: entities::PostId,
    } => {
        pub post: entities::Post,
    }
}

usecase! {
    comment : {
        pub post_id: entities::PostId,
        pub user: entities::User,
        pub text: String,
    } => {
        pub post: entities::Post,
    }
}
