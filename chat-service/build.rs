fn main() -> Result<(), Box<dyn std::error::Error>> {
    // chat.ChatService is served here
    tonic_build::configure()
        .build_server(true)
        .build_client(false)
        .compile(&["../proto/chat.proto"], &["../proto"])?;

    // user.InternalUserService is called for participant checks
    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile(&["../proto/user.proto"], &["../proto"])?;

    Ok(())
}
